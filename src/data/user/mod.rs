use serde::Serialize;
use uuid::Uuid;

pub mod db;

use crate::role::Role;

/// Plaintext password, compared byte for byte on login.
///
/// Never serialized and never printed by `Debug`.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Password(String);

impl Password {
    pub fn new(password: impl ToString) -> Password {
        Password(password.to_string())
    }

    pub fn matches(&self, candidate: impl AsRef<str>) -> bool {
        self.0 == candidate.as_ref()
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Password(***)")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    #[serde(skip)]
    pub password: Password,
    pub user_role: Role,
}

/// Stable user id, derived from the email so it survives re-seeding.
pub fn user_id(email: impl AsRef<str>) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, email.as_ref().as_bytes())
}

impl User {
    pub fn new(
        email: impl ToString,
        username: impl ToString,
        password: impl ToString,
        user_role: Role,
    ) -> User {
        let email = email.to_string();
        let id = user_id(&email);
        tracing::debug!("Creating a new {} user with UUID: {}", user_role, id);

        User {
            id,
            email,
            username: username.to_string(),
            password: Password::new(password),
            user_role,
        }
    }

    pub fn is_teacher(&self) -> bool {
        self.user_role.can_teach()
    }

    pub fn is_student(&self) -> bool {
        self.user_role.can_enroll()
    }
}

/// Username given to students created by the enrollment flow: the part of
/// the email before `@`.
pub fn default_username(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
