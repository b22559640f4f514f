use crate::data::course::db::{CourseContent, CourseSummary, StudentGrade};
use crate::data::course::{Course, CourseId};
use crate::registry::Registry;
use crate::resp::problem::{problems, Problem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    email: String,
}

impl Student {
    pub(crate) fn new(email: impl ToString) -> Student {
        Student {
            email: email.to_string(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn enrolled_courses(&self, registry: &Registry) -> Vec<CourseSummary> {
        registry.list_courses_where(|it| it.is_enrolled(&self.email))
    }

    /// Courses this student could still enroll into.
    pub fn available_courses(&self, registry: &Registry) -> Vec<CourseSummary> {
        registry.list_courses_where(|it| !it.is_enrolled(&self.email))
    }

    fn enrolled_course<'r>(
        &self,
        registry: &'r Registry,
        id: CourseId,
    ) -> Result<&'r Course, Problem> {
        let course = registry.course(id)?;
        if !course.is_enrolled(&self.email) {
            return Err(problems::not_your_course(id));
        }
        Ok(course)
    }

    pub fn view_course(&self, registry: &Registry, id: CourseId) -> Result<CourseContent, Problem> {
        Ok(CourseContent::from(self.enrolled_course(registry, id)?))
    }

    /// The student's grade in one course. Only the first recorded entry
    /// counts; `grade` is `None` when nothing was recorded yet.
    pub fn grade(&self, registry: &Registry, id: CourseId) -> Result<StudentGrade, Problem> {
        let course = self.enrolled_course(registry, id)?;
        Ok(StudentGrade {
            course: id,
            course_name: course.name().to_string(),
            grade: course.grade_for(&self.email),
        })
    }

    pub fn grades(&self, registry: &Registry) -> Vec<StudentGrade> {
        registry
            .courses()
            .iter()
            .filter(|it| it.is_enrolled(&self.email))
            .map(|it| StudentGrade {
                course: it.id(),
                course_name: it.name().to_string(),
                grade: it.grade_for(&self.email),
            })
            .collect()
    }

    #[tracing::instrument(skip(registry))]
    pub fn enroll(&self, registry: &mut Registry, id: CourseId) -> Result<(), Problem> {
        let course = registry.course_mut(id)?;
        course.enroll_student(&self.email)?;
        tracing::info!("{} enrolled into '{}'", self.email, course.name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed::Seed;
    use crate::ops::pick;
    use crate::resp::problem::ProblemKind;
    use pretty_assertions::assert_eq;

    fn setup() -> (Registry, Student) {
        (
            Registry::bootstrap(&Seed::default()).unwrap(),
            Student::new("jane@school.org"),
        )
    }

    #[test]
    fn enroll_from_available_courses() {
        let (mut registry, student) = setup();
        assert!(student.enrolled_courses(&registry).is_empty());

        let available = student.available_courses(&registry);
        assert_eq!(available.len(), 2);

        let physics = pick(&available, 1).unwrap();
        student.enroll(&mut registry, physics).unwrap();

        let enrolled = student.enrolled_courses(&registry);
        assert_eq!(enrolled.len(), 1);
        assert_eq!(enrolled[0].name, "Physics");

        let available = student.available_courses(&registry);
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].name, "Mathematics");

        let problem = student.enroll(&mut registry, physics).unwrap_err();
        assert_eq!(problem.kind, ProblemKind::Validation);
        assert_eq!(registry.course(physics).unwrap().students().len(), 1);
    }

    #[test]
    fn content_only_for_enrolled_courses() {
        let (mut registry, student) = setup();
        let mathematics = registry.get_course(0).unwrap().id();

        let problem = student.view_course(&registry, mathematics).unwrap_err();
        assert_eq!(problem.kind, ProblemKind::Forbidden);

        student.enroll(&mut registry, mathematics).unwrap();
        let content = student.view_course(&registry, mathematics).unwrap();
        assert_eq!(content.name, "Mathematics");
        assert_eq!(content.contents.len(), 2);
    }

    #[test]
    fn first_grade_entry_wins() {
        let (mut registry, student) = setup();
        let physics = registry.get_course(1).unwrap().id();
        student.enroll(&mut registry, physics).unwrap();

        assert_eq!(student.grade(&registry, physics).unwrap().grade, None);

        let course = registry.course_mut(physics).unwrap();
        course.add_grade("jane@school.org", 61).unwrap();
        course.add_grade("jane@school.org", 95).unwrap();

        assert_eq!(
            student.grade(&registry, physics).unwrap(),
            StudentGrade {
                course: physics,
                course_name: "Physics".to_string(),
                grade: Some(61),
            }
        );
        assert_eq!(student.grades(&registry).len(), 1);
    }
}
