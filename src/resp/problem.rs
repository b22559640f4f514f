use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};

use crate::error::RegistryError;

/// Broad class of a [`Problem`]; shells use it to pick how to render one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProblemKind {
    Validation,
    Index,
    Auth,
    NotFound,
    Forbidden,
    Internal,
}

impl ProblemKind {
    pub fn code(self) -> &'static str {
        match self {
            ProblemKind::Validation => "validation",
            ProblemKind::Index => "index",
            ProblemKind::Auth => "auth",
            ProblemKind::NotFound => "not-found",
            ProblemKind::Forbidden => "forbidden",
            ProblemKind::Internal => "internal",
        }
    }
}

impl Display for ProblemKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// User-facing failure of a role operation.
///
/// Shaped after [RFC7807](https://tools.ietf.org/html/rfc7807) so the same
/// value renders as text for a terminal or as JSON for anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub kind: ProblemKind,
    pub type_uri: String,
    pub title: String,

    pub detail: Option<String>,

    pub body: Map<String, Value>,
}

impl Default for Problem {
    fn default() -> Self {
        Problem {
            kind: ProblemKind::Internal,
            type_uri: "about:blank".to_string(),
            title: "Problem".to_string(),
            detail: None,
            body: Map::new(),
        }
    }
}

impl Problem {
    pub fn new_untyped(kind: ProblemKind, title: impl ToString) -> Problem {
        Problem {
            kind,
            type_uri: "about:blank".to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn detail(&mut self, value: impl ToString) -> &mut Problem {
        self.detail = Some(value.to_string());
        self
    }

    pub fn insert<V: Serialize>(&mut self, key: impl ToString, value: V) -> &mut Problem {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.body.insert(key.to_string(), value);
        self
    }

    pub fn insert_str(&mut self, key: impl ToString, value: impl ToString) -> &mut Problem {
        self.body
            .insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    /// Flattens the problem into an `application/problem+json` object.
    pub fn to_json(&self) -> Value {
        let mut body = self.body.clone();

        // Following are required by rfc7807
        body.insert(String::from("type"), Value::from(self.type_uri.clone()));
        body.insert(String::from("title"), Value::from(self.title.clone()));

        if let Some(detail) = &self.detail {
            body.insert(String::from("detail"), Value::from(detail.clone()));
        }
        body.insert(String::from("kind"), Value::from(self.kind.code()));

        Value::Object(body)
    }
}

impl Display for Problem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} {}", self.title, detail),
            None => write!(f, "{}", self.title),
        }
    }
}

impl std::error::Error for Problem {}

pub mod problems {
    use super::{Problem, ProblemKind};
    use crate::data::course::CourseId;

    #[inline]
    pub fn not_your_course(id: CourseId) -> Problem {
        Problem::new_untyped(ProblemKind::Forbidden, "You don't have access to that course.")
            .insert("course", id)
            .to_owned()
    }

    #[inline]
    pub fn not_enrolled(email: impl ToString) -> Problem {
        Problem::new_untyped(
            ProblemKind::Validation,
            "Student is not enrolled in this course.",
        )
        .insert_str("email", email)
        .to_owned()
    }

    #[inline]
    pub fn teacher_busy(email: impl ToString) -> Problem {
        Problem::new_untyped(
            ProblemKind::Validation,
            "Teacher is already assigned to another course.",
        )
        .insert_str("email", email)
        .to_owned()
    }

    #[inline]
    pub fn not_a_teacher(email: impl ToString) -> Problem {
        Problem::new_untyped(
            ProblemKind::Validation,
            "The email does not belong to a registered teacher.",
        )
        .insert_str("email", email)
        .to_owned()
    }

    #[inline]
    pub fn not_a_student(email: impl ToString) -> Problem {
        Problem::new_untyped(
            ProblemKind::Validation,
            "The email belongs to a user who isn't a student.",
        )
        .insert_str("email", email)
        .to_owned()
    }

    #[inline]
    pub fn missing_password(email: impl ToString) -> Problem {
        Problem::new_untyped(
            ProblemKind::Validation,
            "A password is required to create a new student account.",
        )
        .insert_str("email", email)
        .to_owned()
    }
}

impl From<RegistryError> for Problem {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::Validation(message) => {
                Problem::new_untyped(ProblemKind::Validation, message)
            }
            RegistryError::Index { what, index, len } => {
                let title = match what {
                    "content" => "Invalid content index.",
                    _ => "Invalid course index.",
                };
                Problem::new_untyped(ProblemKind::Index, title)
                    .detail(match len {
                        0 => "There is nothing to choose from.".to_string(),
                        len => format!("Please enter a number between 1 and {}.", len),
                    })
                    .insert("index", index)
                    .to_owned()
            }
            RegistryError::Auth => {
                Problem::new_untyped(ProblemKind::Auth, "Invalid email or password.")
            }
            RegistryError::CourseNotFound(id) => {
                Problem::new_untyped(ProblemKind::NotFound, "Course doesn't exist.")
                    .insert("id", id.to_string())
                    .to_owned()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn index_errors_keep_position() {
        let problem = Problem::from(RegistryError::content_index(3, 2));
        assert_eq!(problem.kind, ProblemKind::Index);
        assert_eq!(problem.title, "Invalid content index.");
        assert_eq!(
            problem.to_json(),
            json!({
                "type": "about:blank",
                "title": "Invalid content index.",
                "detail": "Please enter a number between 1 and 2.",
                "kind": "index",
                "index": 3,
            })
        );
    }

    #[test]
    fn validation_message_becomes_title() {
        let problem = Problem::from(RegistryError::validation("Student not found"));
        assert_eq!(problem.kind, ProblemKind::Validation);
        assert_eq!(problem.to_string(), "Student not found");
    }
}
