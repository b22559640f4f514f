use crate::data::course::db::{CourseContent, CourseReport, CourseSummary};
use crate::data::course::{Course, CourseId};
use crate::data::user::db::problem as user_problem;
use crate::registry::Registry;
use crate::resp::problem::{problems, Problem};
use crate::validation;

/// A teacher only ever sees the courses assigned to their email. Course ids
/// come from [`Teacher::assigned_courses`] and are checked again on use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    email: String,
}

impl Teacher {
    pub(crate) fn new(email: impl ToString) -> Teacher {
        Teacher {
            email: email.to_string(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn assigned_courses(&self, registry: &Registry) -> Vec<CourseSummary> {
        registry.list_courses_where(|it| it.is_taught_by(&self.email))
    }

    fn own_course<'r>(&self, registry: &'r Registry, id: CourseId) -> Result<&'r Course, Problem> {
        let course = registry.course(id)?;
        if !course.is_taught_by(&self.email) {
            return Err(problems::not_your_course(id));
        }
        Ok(course)
    }

    fn own_course_mut<'r>(
        &self,
        registry: &'r mut Registry,
        id: CourseId,
    ) -> Result<&'r mut Course, Problem> {
        let course = registry.course_mut(id)?;
        if !course.is_taught_by(&self.email) {
            return Err(problems::not_your_course(id));
        }
        Ok(course)
    }

    pub fn view_course(&self, registry: &Registry, id: CourseId) -> Result<CourseContent, Problem> {
        Ok(CourseContent::from(self.own_course(registry, id)?))
    }

    #[tracing::instrument(skip(registry))]
    pub fn add_content(
        &self,
        registry: &mut Registry,
        id: CourseId,
        content: &str,
    ) -> Result<(), Problem> {
        self.own_course_mut(registry, id)?.add_content(content)?;
        Ok(())
    }

    /// Records a grade for a student enrolled in one of this teacher's
    /// courses.
    #[tracing::instrument(skip(registry))]
    pub fn add_grade(
        &self,
        registry: &mut Registry,
        id: CourseId,
        student_email: &str,
        grade: i32,
    ) -> Result<(), Problem> {
        if !validation::is_valid_email(student_email) {
            return Err(user_problem::bad_email(student_email).into());
        }

        let course = self.own_course_mut(registry, id)?;
        if !course.is_enrolled(student_email) {
            return Err(problems::not_enrolled(student_email));
        }

        course.add_grade(student_email, grade)?;
        tracing::info!("Graded {} in '{}': {}", student_email, course.name(), grade);
        Ok(())
    }

    /// Emails of the students enrolled in the course; empty if there are none.
    pub fn assigned_students(
        &self,
        registry: &Registry,
        id: CourseId,
    ) -> Result<Vec<String>, Problem> {
        Ok(self.own_course(registry, id)?.students().to_vec())
    }

    pub fn report(&self, registry: &Registry) -> Vec<CourseReport> {
        registry
            .courses()
            .iter()
            .filter(|it| it.is_taught_by(&self.email))
            .map(CourseReport::from)
            .collect()
    }
}
