use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Course, CourseId, GradeEntry};

/// Admin input for a new course.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseCreateData {
    pub name: String,
    pub teacher_email: String,
    /// Registers the teacher on the fly when `teacher_email` isn't known yet.
    #[serde(default)]
    pub register_teacher: Option<TeacherSignupData>,
}

impl CourseCreateData {
    pub fn new(name: impl ToString, teacher_email: impl ToString) -> CourseCreateData {
        CourseCreateData {
            name: name.to_string(),
            teacher_email: teacher_email.to_string(),
            register_teacher: None,
        }
    }

    pub fn registering(mut self, username: impl ToString, password: impl ToString) -> Self {
        self.register_teacher = Some(TeacherSignupData {
            username: username.to_string(),
            password: password.to_string(),
        });
        self
    }
}

#[derive(Clone, Deserialize)]
pub struct TeacherSignupData {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for TeacherSignupData {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TeacherSignupData:{}", self.username)
    }
}

/// One row of a course listing. `index` is the position in the list it came
/// from, which may be a filtered view rather than the whole registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSummary {
    pub index: usize,
    pub id: CourseId,
    pub name: String,
    pub teacher_email: String,
}

impl CourseSummary {
    pub fn new(index: usize, course: &Course) -> Self {
        Self {
            index,
            id: course.id(),
            name: course.name().to_string(),
            teacher_email: course.teacher_email().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseContent {
    pub id: CourseId,
    pub name: String,
    pub contents: Vec<String>,
}

impl From<&Course> for CourseContent {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id(),
            name: course.name().to_string(),
            contents: course.contents().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseReport {
    pub id: CourseId,
    pub name: String,
    pub teacher_email: String,
    pub created: DateTime<Utc>,
    pub students: Vec<String>,
    pub grades: Vec<GradeEntry>,
}

impl From<&Course> for CourseReport {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id(),
            name: course.name().to_string(),
            teacher_email: course.teacher_email().to_string(),
            created: course.created(),
            students: course.students().to_vec(),
            grades: course.grades().to_vec(),
        }
    }
}

/// A student's view of their own standing in one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentGrade {
    pub course: CourseId,
    pub course_name: String,
    pub grade: Option<u8>,
}
