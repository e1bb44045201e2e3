//! Credentials submitted by the login and registration forms.

use serde::{Deserialize, Serialize};

use crate::error::{MaintrackError, ValidationError};

/// Minimum password length accepted by the registration form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Build from raw form input. The email is trimmed, the password is kept as typed.
    #[must_use]
    pub fn from_input(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }

    /// Check that both fields are filled in.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] when either field is empty.
    pub fn validate(&self) -> Result<(), MaintrackError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields.into());
        }
        Ok(())
    }
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    /// Build from raw form input. Name and email are trimmed.
    #[must_use]
    pub fn from_input(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }

    /// Check required fields and the password length.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] when any field is empty, or
    /// [`ValidationError::PasswordTooShort`] when the password has fewer than
    /// [`MIN_PASSWORD_LEN`] characters.
    pub fn validate(&self) -> Result<(), MaintrackError> {
        if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields.into());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            }
            .into());
        }
        Ok(())
    }
}

/// Successful `POST /auth/login` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
