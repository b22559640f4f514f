use serde::Serialize;

use crate::data::course::db::{CourseContent, CourseCreateData, CourseReport, CourseSummary};
use crate::data::course::{Course, CourseId};
use crate::data::user::db::problem as user_problem;
use crate::data::user::db::{UserRegistryExt, UserSignupData};
use crate::data::user::default_username;
use crate::error::RegistryError;
use crate::registry::Registry;
use crate::resp::problem::{problems, Problem};
use crate::role::Role;
use crate::validation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    email: String,
}

/// Result of [`Admin::enroll_student`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enrollment {
    pub course: CourseId,
    pub student_email: String,
    /// Whether a new student account was created for the enrollment.
    pub created_account: bool,
}

impl Admin {
    pub(crate) fn new(email: impl ToString) -> Admin {
        Admin {
            email: email.to_string(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Creates a course for a registered teacher who doesn't teach one yet.
    ///
    /// If the teacher email is unknown and `data.register_teacher` is set, the
    /// teacher account is created along with the course.
    #[tracing::instrument(skip(registry))]
    pub fn add_course(
        &self,
        registry: &mut Registry,
        data: CourseCreateData,
    ) -> Result<CourseId, Problem> {
        let course = Course::new(&data.name, &data.teacher_email)?;

        let is_teacher = registry
            .find_user_by_email(&data.teacher_email)
            .map(|it| it.is_teacher());
        let register = match is_teacher {
            Some(true) => None,
            Some(false) => return Err(problems::not_a_teacher(&data.teacher_email)),
            None => match data.register_teacher {
                Some(signup) => Some(signup),
                None => return Err(problems::not_a_teacher(&data.teacher_email)),
            },
        };

        if registry
            .courses()
            .iter()
            .any(|it| it.is_taught_by(&data.teacher_email))
        {
            return Err(problems::teacher_busy(&data.teacher_email));
        }

        if let Some(signup) = register {
            registry.create_user(UserSignupData::new(
                &data.teacher_email,
                signup.username,
                signup.password,
                Role::Teacher,
            ))?;
        }

        let id = registry.add_course(course);
        tracing::info!("Course '{}' added for {}", data.name, data.teacher_email);
        Ok(id)
    }

    #[tracing::instrument(skip(registry))]
    pub fn delete_course(&self, registry: &mut Registry, index: usize) -> Result<Course, Problem> {
        let removed = registry.remove_course(index)?;
        tracing::info!("Deleted course '{}'", removed.name());
        Ok(removed)
    }

    pub fn list_courses(&self, registry: &Registry) -> Vec<CourseSummary> {
        registry.list_courses()
    }

    pub fn view_course(&self, registry: &Registry, index: usize) -> Result<CourseContent, Problem> {
        Ok(CourseContent::from(registry.get_course(index)?))
    }

    #[tracing::instrument(skip(registry))]
    pub fn add_content(
        &self,
        registry: &mut Registry,
        index: usize,
        content: &str,
    ) -> Result<(), Problem> {
        registry.get_course_mut(index)?.add_content(content)?;
        Ok(())
    }

    #[tracing::instrument(skip(registry))]
    pub fn remove_content(
        &self,
        registry: &mut Registry,
        index: usize,
        content_index: usize,
    ) -> Result<String, Problem> {
        Ok(registry
            .get_course_mut(index)?
            .remove_content(content_index)?)
    }

    /// Enrolls `student_email` into the course at `index`, creating the
    /// student account first when the email is new. A new account needs a
    /// `password`.
    #[tracing::instrument(skip(registry, password))]
    pub fn enroll_student(
        &self,
        registry: &mut Registry,
        index: usize,
        student_email: &str,
        password: Option<&str>,
    ) -> Result<Enrollment, Problem> {
        let course = registry.get_course(index)?;
        let course_id = course.id();

        if !validation::is_valid_email(student_email) {
            return Err(user_problem::bad_email(student_email).into());
        }
        if course.is_enrolled(student_email) {
            return Err(RegistryError::validation("Student already enrolled").into());
        }

        let is_student = registry
            .find_user_by_email(student_email)
            .map(|it| it.is_student());
        let created_account = match is_student {
            Some(true) => false,
            Some(false) => return Err(problems::not_a_student(student_email)),
            None => {
                let password = password.ok_or_else(|| problems::missing_password(student_email))?;
                registry.create_user(UserSignupData::new(
                    student_email,
                    default_username(student_email),
                    password,
                    Role::Student,
                ))?;
                true
            }
        };

        registry.get_course_mut(index)?.enroll_student(student_email)?;
        tracing::info!("Enrolled {} into {}", student_email, course_id);

        Ok(Enrollment {
            course: course_id,
            student_email: student_email.to_string(),
            created_account,
        })
    }

    #[tracing::instrument(skip(registry))]
    pub fn remove_student(
        &self,
        registry: &mut Registry,
        index: usize,
        student_email: &str,
    ) -> Result<(), Problem> {
        registry
            .get_course_mut(index)?
            .remove_student(student_email)?;
        Ok(())
    }

    /// Every course with its students and grades.
    pub fn report(&self, registry: &Registry) -> Vec<CourseReport> {
        registry.courses().iter().map(CourseReport::from).collect()
    }
}
