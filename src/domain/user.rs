//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Password;
use crate::config::MIN_PASSWORD_LENGTH;

/// Registered forum user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Registration input, checked before anything touches the store
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Registration {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = MIN_PASSWORD_LENGTH, message = "Password must be at least 9 characters"))]
    pub password: String,
}

impl Registration {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Result of a successful `authenticate` call.
///
/// Holds the signed-in user's row as it was at login time. The setters
/// only change this value; nothing is written back to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    id: i32,
    username: String,
    email: String,
    #[serde(skip_serializing)]
    password_hash: String,
}

impl AuthenticatedUser {
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Replace the held hash with a freshly hashed password.
    pub fn set_password(&mut self, password: Password) {
        self.password_hash = password.into_string();
    }
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
        }
    }
}
