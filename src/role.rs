use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    /// Indicates whether users with this role can be assigned to a course.
    pub fn can_teach(self) -> bool {
        self == Role::Teacher
    }

    /// Indicates whether users with this role can be enrolled into a course.
    pub fn can_enroll(self) -> bool {
        self == Role::Student
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Teacher => write!(f, "teacher"),
            Role::Student => write!(f, "student"),
        }
    }
}
