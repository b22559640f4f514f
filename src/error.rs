use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("configuration file not found in '{0}'")]
    NotFound(PathBuf),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failures raised by entities and the registry itself.
///
/// These are never shown to a user directly; the role operations turn them
/// into a [`Problem`](crate::resp::problem::Problem).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{0}")]
    Validation(String),
    #[error("invalid {what} index {index} (have {len})")]
    Index {
        what: &'static str,
        index: usize,
        len: usize,
    },
    #[error("no user matches the supplied email and password")]
    Auth,
    #[error("course {0} doesn't exist")]
    CourseNotFound(Uuid),
}

impl RegistryError {
    #[inline]
    pub fn validation(message: impl ToString) -> RegistryError {
        RegistryError::Validation(message.to_string())
    }

    #[inline]
    pub fn course_index(index: usize, len: usize) -> RegistryError {
        RegistryError::Index {
            what: "course",
            index,
            len,
        }
    }

    #[inline]
    pub fn content_index(index: usize, len: usize) -> RegistryError {
        RegistryError::Index {
            what: "content",
            index,
            len,
        }
    }
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("invalid seed data: {0}")]
    Seed(#[from] RegistryError),
}
