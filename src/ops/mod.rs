//! Role-scoped operations over a [`Registry`].
//!
//! A caller logs in once and gets a [`UserHandle`]; the variant decides which
//! operations exist for them. Every operation takes the registry explicitly
//! and reports failure as a [`Problem`] the shell can render.

use serde::Serialize;

pub mod admin;
pub mod student;
pub mod teacher;

pub use admin::Admin;
pub use student::Student;
pub use teacher::Teacher;

use crate::data::course::db::CourseSummary;
use crate::data::course::CourseId;
use crate::data::user::db::{UserLoginData, UserRegistryExt};
use crate::error::RegistryError;
use crate::registry::Registry;
use crate::resp::problem::Problem;
use crate::role::Role;
use crate::validation;

/// A logged in user, resolved to their role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserHandle {
    Admin(Admin),
    Teacher(Teacher),
    Student(Student),
}

/// Menu entries a shell may offer for a [`UserHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operation {
    AddCourse,
    DeleteCourse,
    EditCourse,
    ListCourses,
    EnrollStudent,
    RemoveStudent,
    ViewCourse,
    AddContent,
    AddGrade,
    ViewAssignedStudents,
    ViewReports,
    ViewEnrolledCourses,
    ViewGrades,
    EnrollInCourse,
}

static ADMIN_OPERATIONS: &[Operation] = &[
    Operation::AddCourse,
    Operation::DeleteCourse,
    Operation::EditCourse,
    Operation::ListCourses,
    Operation::EnrollStudent,
    Operation::RemoveStudent,
    Operation::ViewReports,
];

static TEACHER_OPERATIONS: &[Operation] = &[
    Operation::ViewCourse,
    Operation::AddContent,
    Operation::AddGrade,
    Operation::ViewAssignedStudents,
    Operation::ViewReports,
];

static STUDENT_OPERATIONS: &[Operation] = &[
    Operation::ViewEnrolledCourses,
    Operation::ViewGrades,
    Operation::EnrollInCourse,
];

#[tracing::instrument(skip(registry))]
pub fn login(registry: &Registry, credentials: UserLoginData) -> Result<UserHandle, Problem> {
    let user = registry.authenticate(&credentials)?;
    tracing::info!("{} '{}' logged in", user.user_role, user.email);

    let email = user.email.clone();
    Ok(match user.user_role {
        Role::Admin => UserHandle::Admin(Admin::new(email)),
        Role::Teacher => UserHandle::Teacher(Teacher::new(email)),
        Role::Student => UserHandle::Student(Student::new(email)),
    })
}

impl UserHandle {
    pub fn role(&self) -> Role {
        match self {
            UserHandle::Admin(_) => Role::Admin,
            UserHandle::Teacher(_) => Role::Teacher,
            UserHandle::Student(_) => Role::Student,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            UserHandle::Admin(admin) => admin.email(),
            UserHandle::Teacher(teacher) => teacher.email(),
            UserHandle::Student(student) => student.email(),
        }
    }

    /// Operations available to this handle, in menu order.
    pub fn operations(&self) -> &'static [Operation] {
        match self {
            UserHandle::Admin(_) => ADMIN_OPERATIONS,
            UserHandle::Teacher(_) => TEACHER_OPERATIONS,
            UserHandle::Student(_) => STUDENT_OPERATIONS,
        }
    }
}

/// Resolves a position in a listing to the id of the course shown there.
///
/// `listing` must be the list the position was chosen from; for a teacher or
/// a student that's their filtered view, not the whole registry.
pub fn pick(listing: &[CourseSummary], index: usize) -> Result<CourseId, Problem> {
    if !validation::is_valid_index(index, listing.len()) {
        return Err(RegistryError::course_index(index, listing.len()).into());
    }
    Ok(listing[index].id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::course::db::CourseCreateData;
    use crate::data::seed::Seed;
    use crate::resp::problem::ProblemKind;
    use pretty_assertions::assert_eq;

    fn seeded() -> Registry {
        Registry::bootstrap(&Seed::default()).unwrap()
    }

    #[test]
    fn login_resolves_role() {
        let registry = seeded();

        let admin = login(
            &registry,
            UserLoginData::new("admin1@example.com", "adminpass"),
        )
        .unwrap();
        assert_eq!(admin.role(), Role::Admin);
        assert_eq!(admin.operations(), ADMIN_OPERATIONS);

        let teacher = login(
            &registry,
            UserLoginData::new("teacher2@example.com", "teacherpass"),
        )
        .unwrap();
        assert_eq!(
            teacher,
            UserHandle::Teacher(Teacher::new("teacher2@example.com"))
        );
        assert_eq!(teacher.email(), "teacher2@example.com");
    }

    #[test]
    fn login_rejects_bad_credentials() {
        let registry = seeded();

        let problem = login(
            &registry,
            UserLoginData::new("admin1@example.com", "teacherpass"),
        )
        .unwrap_err();
        assert_eq!(problem.kind, ProblemKind::Auth);

        let problem = login(&registry, UserLoginData::new("ghost@example.com", "x")).unwrap_err();
        assert_eq!(problem.kind, ProblemKind::Auth);
    }

    #[test]
    fn course_lifecycle_across_roles() {
        let mut registry = seeded();

        let admin = match login(
            &registry,
            UserLoginData::new("admin1@example.com", "adminpass"),
        ) {
            Ok(UserHandle::Admin(admin)) => admin,
            other => panic!("expected admin handle, got {:?}", other),
        };

        admin
            .add_course(
                &mut registry,
                CourseCreateData::new("Chemistry", "teacher3@example.com")
                    .registering("teacher3", "teacherpass"),
            )
            .unwrap();
        let chemistry = admin.list_courses(&registry)[2].index;
        admin
            .enroll_student(&mut registry, chemistry, "jane@school.org", Some("janepass"))
            .unwrap();

        let teacher = match login(
            &registry,
            UserLoginData::new("teacher3@example.com", "teacherpass"),
        ) {
            Ok(UserHandle::Teacher(teacher)) => teacher,
            other => panic!("expected teacher handle, got {:?}", other),
        };
        let assigned = teacher.assigned_courses(&registry);
        let id = pick(&assigned, 0).unwrap();
        assert_eq!(
            teacher.assigned_students(&registry, id).unwrap(),
            vec!["jane@school.org"]
        );
        teacher.add_content(&mut registry, id, "Periodic Table").unwrap();
        teacher
            .add_grade(&mut registry, id, "jane@school.org", 88)
            .unwrap();

        let student = match login(
            &registry,
            UserLoginData::new("jane@school.org", "janepass"),
        ) {
            Ok(UserHandle::Student(student)) => student,
            other => panic!("expected student handle, got {:?}", other),
        };
        let enrolled = student.enrolled_courses(&registry);
        assert_eq!(enrolled.len(), 1);
        assert_eq!(enrolled[0].id, id);
        assert_eq!(
            student.view_course(&registry, id).unwrap().contents,
            vec!["Periodic Table"]
        );
        assert_eq!(student.grade(&registry, id).unwrap().grade, Some(88));

        let report = admin.report(&registry);
        assert_eq!(report[2].grades.len(), 1);
        assert!(report[..2].iter().all(|it| it.grades.is_empty()));
    }

    #[test]
    fn pick_checks_the_listing_it_was_given() {
        let registry = seeded();
        let physics_only = registry.list_courses_where(|it| it.name() == "Physics");

        let id = pick(&physics_only, 0).unwrap();
        assert_eq!(registry.course(id).unwrap().name(), "Physics");

        let problem = pick(&physics_only, 1).unwrap_err();
        assert_eq!(problem.kind, ProblemKind::Index);
    }
}
