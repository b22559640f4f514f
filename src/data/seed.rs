use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A user created when the registry starts.
#[derive(Clone, Serialize, Deserialize)]
pub struct SeedUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl std::fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SeedUser:{}:{}", self.role, self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCourse {
    pub name: String,
    pub teacher_email: String,
    #[serde(default)]
    pub contents: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub courses: Vec<SeedCourse>,
}

impl Seed {
    pub fn empty() -> Seed {
        Seed {
            users: vec![],
            courses: vec![],
        }
    }
}

fn seed_user(username: &str, email: &str, password: &str, role: Role) -> SeedUser {
    SeedUser {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role,
    }
}

fn seed_course(name: &str, teacher_email: &str, contents: &[&str]) -> SeedCourse {
    SeedCourse {
        name: name.to_string(),
        teacher_email: teacher_email.to_string(),
        contents: contents.iter().map(|it| it.to_string()).collect(),
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed {
            users: vec![
                seed_user("admin1", "admin1@example.com", "adminpass", Role::Admin),
                seed_user("teacher1", "teacher1@example.com", "teacherpass", Role::Teacher),
                seed_user("teacher2", "teacher2@example.com", "teacherpass", Role::Teacher),
            ],
            courses: vec![
                seed_course(
                    "Mathematics",
                    "teacher1@example.com",
                    &["Introduction to Algebra", "Advanced Calculus"],
                ),
                seed_course(
                    "Physics",
                    "teacher2@example.com",
                    &["Newton's Laws", "Thermodynamics"],
                ),
            ],
        }
    }
}
