use chrono::{DateTime, Utc};
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod db;

use crate::error::RegistryError;
use crate::validation;

/// Stable handle for a course.
///
/// Filtered views of the registry hand these out instead of positions, so a
/// course picked from "my courses" always resolves to the registry's own
/// entry.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize, Deref, Display,
)]
pub struct CourseId(Uuid);

impl CourseId {
    pub fn new() -> CourseId {
        CourseId(Uuid::new_v4())
    }
}

impl From<CourseId> for Uuid {
    fn from(id: CourseId) -> Self {
        *id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeEntry {
    pub student_email: String,
    pub grade: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct Course {
    id: CourseId,
    name: String,
    teacher_email: String,
    created: DateTime<Utc>,

    contents: Vec<String>,
    students: Vec<String>,
    grades: Vec<GradeEntry>,
}

impl Course {
    pub fn new(name: impl ToString, teacher_email: impl ToString) -> Result<Course, RegistryError> {
        let name = name.to_string();
        let teacher_email = teacher_email.to_string();

        if !validation::is_valid_string(&name) {
            return Err(RegistryError::validation("Invalid course name"));
        }
        if !validation::is_valid_email(&teacher_email) {
            return Err(RegistryError::validation("Invalid teacher email"));
        }

        Ok(Course {
            id: CourseId::new(),
            name,
            teacher_email,
            created: Utc::now(),
            contents: vec![],
            students: vec![],
            grades: vec![],
        })
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn teacher_email(&self) -> &str {
        &self.teacher_email
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn contents(&self) -> &[String] {
        &self.contents
    }

    pub fn students(&self) -> &[String] {
        &self.students
    }

    pub fn grades(&self) -> &[GradeEntry] {
        &self.grades
    }

    pub fn is_taught_by(&self, email: impl AsRef<str>) -> bool {
        self.teacher_email == email.as_ref()
    }

    pub fn is_enrolled(&self, email: impl AsRef<str>) -> bool {
        let email = email.as_ref();
        self.students.iter().any(|it| it == email)
    }

    /// First grade entry recorded for `email`. Later entries for the same
    /// student are kept but never read back here.
    pub fn grade_for(&self, email: impl AsRef<str>) -> Option<u8> {
        let email = email.as_ref();
        self.grades
            .iter()
            .find(|it| it.student_email == email)
            .map(|it| it.grade)
    }

    pub fn add_content(&mut self, content: impl ToString) -> Result<(), RegistryError> {
        let content = content.to_string();
        if !validation::is_valid_string(&content) {
            return Err(RegistryError::validation("Invalid content"));
        }

        self.contents.push(content);
        Ok(())
    }

    /// Removes the content item at `index`, shifting later items down.
    pub fn remove_content(&mut self, index: usize) -> Result<String, RegistryError> {
        if !validation::is_valid_index(index, self.contents.len()) {
            return Err(RegistryError::content_index(index, self.contents.len()));
        }

        Ok(self.contents.remove(index))
    }

    /// Appends a grade entry. Enrollment isn't checked here.
    pub fn add_grade(
        &mut self,
        student_email: impl ToString,
        grade: i32,
    ) -> Result<(), RegistryError> {
        let student_email = student_email.to_string();
        if !validation::is_valid_email(&student_email) {
            return Err(RegistryError::validation("Invalid student email"));
        }
        if !validation::is_valid_grade(grade) {
            return Err(RegistryError::validation("Invalid grade"));
        }

        self.grades.push(GradeEntry {
            student_email,
            // in 0..=100 after the check above
            grade: grade as u8,
        });
        Ok(())
    }

    pub fn enroll_student(&mut self, student_email: impl ToString) -> Result<(), RegistryError> {
        let student_email = student_email.to_string();
        if !validation::is_valid_email(&student_email) {
            return Err(RegistryError::validation("Invalid student email"));
        }
        if self.is_enrolled(&student_email) {
            return Err(RegistryError::validation("Student already enrolled"));
        }

        self.students.push(student_email);
        Ok(())
    }

    pub fn remove_student(&mut self, student_email: impl AsRef<str>) -> Result<(), RegistryError> {
        let student_email = student_email.as_ref();
        match self.students.iter().position(|it| it == student_email) {
            Some(pos) => {
                self.students.remove(pos);
                Ok(())
            }
            None => Err(RegistryError::validation("Student not found")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn algebra() -> Course {
        Course::new("Algebra", "teacher@example.com").expect("valid course")
    }

    #[test]
    fn create_validates_inputs() {
        assert_eq!(
            Course::new("", "teacher@example.com").unwrap_err(),
            RegistryError::validation("Invalid course name")
        );
        assert_eq!(
            Course::new("x".repeat(101), "teacher@example.com").unwrap_err(),
            RegistryError::validation("Invalid course name")
        );
        assert_eq!(
            Course::new("Algebra", "not-an-email").unwrap_err(),
            RegistryError::validation("Invalid teacher email")
        );

        let course = algebra();
        assert!(course.contents().is_empty());
        assert!(course.students().is_empty());
        assert!(course.grades().is_empty());
        assert!(course.is_taught_by("teacher@example.com"));
    }

    #[test]
    fn multibyte_name_limit_is_in_bytes() {
        assert_eq!(
            Course::new("č".repeat(60), "teacher@example.com").unwrap_err(),
            RegistryError::validation("Invalid course name")
        );
        assert!(Course::new("č".repeat(50), "teacher@example.com").is_ok());

        let mut course = algebra();
        assert_eq!(
            course.add_content("ž".repeat(51)).unwrap_err(),
            RegistryError::validation("Invalid content")
        );
        assert!(course.contents().is_empty());
    }

    #[test]
    fn course_id_converts_to_uuid() {
        let course = algebra();
        let id = course.id();
        assert_eq!(Uuid::from(id), *id);
        assert_eq!(id.to_string(), id.as_hyphenated().to_string());
    }

    #[test]
    fn content_is_ordered_and_index_addressed() {
        let mut course = algebra();
        course.add_content("one").unwrap();
        course.add_content("two").unwrap();
        course.add_content("three").unwrap();
        assert!(course.add_content("").is_err());

        assert_eq!(course.remove_content(1).unwrap(), "two");
        assert_eq!(course.contents(), &["one".to_string(), "three".to_string()]);

        assert_eq!(
            course.remove_content(2).unwrap_err(),
            RegistryError::content_index(2, 2)
        );
        assert_eq!(course.contents().len(), 2);
    }

    #[test]
    fn duplicate_enrollment_is_rejected() {
        let mut course = algebra();
        course.enroll_student("a@b.co").unwrap();

        let err = course.enroll_student("a@b.co").unwrap_err();
        assert_eq!(err, RegistryError::validation("Student already enrolled"));
        assert_eq!(course.students().len(), 1);

        assert!(course.enroll_student("bogus").is_err());
        assert_eq!(course.students().len(), 1);
    }

    #[test]
    fn removing_missing_student_fails() {
        let mut course = algebra();
        course.enroll_student("a@b.co").unwrap();

        let err = course.remove_student("c@d.co").unwrap_err();
        assert_eq!(err, RegistryError::validation("Student not found"));
        assert_eq!(course.students(), &["a@b.co".to_string()]);

        course.remove_student("a@b.co").unwrap();
        assert!(course.students().is_empty());
    }

    #[test]
    fn grades_append_without_enrollment() {
        let mut course = algebra();
        assert!(matches!(
            course.add_grade("a@b.co", 150),
            Err(RegistryError::Validation(_))
        ));
        assert!(course.add_grade("bogus", 50).is_err());
        assert!(course.grades().is_empty());

        course.add_grade("a@b.co", 85).unwrap();
        assert_eq!(
            course.grades().last(),
            Some(&GradeEntry {
                student_email: "a@b.co".to_string(),
                grade: 85,
            })
        );
        assert_eq!(course.grades().len(), 1);
    }

    #[test]
    fn first_grade_wins_on_read() {
        let mut course = algebra();
        course.add_grade("a@b.co", 40).unwrap();
        course.add_grade("a@b.co", 90).unwrap();

        assert_eq!(course.grades().len(), 2);
        assert_eq!(course.grade_for("a@b.co"), Some(40));
        assert_eq!(course.grade_for("c@d.co"), None);
    }
}
