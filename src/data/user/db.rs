use crate::error::RegistryError;
use crate::registry::Registry;
use crate::role::Role;
use crate::validation;

use super::User;

pub mod problem {
    use crate::error::RegistryError;

    #[inline]
    pub fn bad_email(email: impl AsRef<str>) -> RegistryError {
        RegistryError::validation(format!("Invalid email '{}'", email.as_ref()))
    }

    #[inline]
    pub fn email_taken(email: impl AsRef<str>) -> RegistryError {
        RegistryError::validation(format!(
            "A user with email '{}' already exists",
            email.as_ref()
        ))
    }

    #[inline]
    pub fn bad_username() -> RegistryError {
        RegistryError::validation("Invalid username")
    }

    #[inline]
    pub fn bad_password() -> RegistryError {
        RegistryError::validation("Invalid password")
    }
}

#[derive(Clone)]
pub struct UserSignupData {
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl std::fmt::Debug for UserSignupData {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserSignupData:{}:{}", self.role, self.email)
    }
}

impl UserSignupData {
    pub fn new(
        email: impl ToString,
        username: impl ToString,
        password: impl ToString,
        role: Role,
    ) -> UserSignupData {
        UserSignupData {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            role,
        }
    }

    pub fn validate(&self) -> Result<(), RegistryError> {
        if !validation::is_valid_email(&self.email) {
            return Err(problem::bad_email(&self.email));
        }
        if !validation::is_valid_string(&self.username) {
            return Err(problem::bad_username());
        }
        if !validation::is_valid_string(&self.password) {
            return Err(problem::bad_password());
        }

        Ok(())
    }
}

impl From<UserSignupData> for User {
    fn from(data: UserSignupData) -> Self {
        User::new(data.email, data.username, data.password, data.role)
    }
}

#[derive(Clone)]
pub struct UserLoginData {
    pub email: String,
    pub password: String,
}

impl UserLoginData {
    pub fn new(email: impl ToString, password: impl ToString) -> UserLoginData {
        UserLoginData {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

impl std::fmt::Debug for UserLoginData {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserLoginData:{}", self.email)
    }
}

/// User-collection operations on the registry.
pub trait UserRegistryExt {
    fn create_user(&mut self, create_user: UserSignupData) -> Result<&User, RegistryError>;

    fn find_user_by_email(&self, email: impl AsRef<str>) -> Option<&User>;

    /// Looks up the user matching both email and password.
    fn authenticate(&self, login: &UserLoginData) -> Result<&User, RegistryError>;
}

impl UserRegistryExt for Registry {
    fn create_user(&mut self, create_user: UserSignupData) -> Result<&User, RegistryError> {
        create_user.validate()?;

        if self.find_user_by_email(&create_user.email).is_some() {
            return Err(problem::email_taken(&create_user.email));
        }

        let user = User::from(create_user);
        tracing::info!("Registered {} '{}'", user.user_role, user.email);

        self.users.push(user);
        Ok(&self.users[self.users.len() - 1])
    }

    fn find_user_by_email(&self, email: impl AsRef<str>) -> Option<&User> {
        let email = email.as_ref();
        self.users.iter().find(|it| it.email == email)
    }

    fn authenticate(&self, login: &UserLoginData) -> Result<&User, RegistryError> {
        self.users
            .iter()
            .find(|it| it.email == login.email && it.password.matches(&login.password))
            .ok_or(RegistryError::Auth)
    }
}
