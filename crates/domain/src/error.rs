//! Common error types used across the workspace.
//!
//! Each layer converts into [`MaintrackError`] via `#[from]`; there are no
//! `String`-typed catch-all variants at this level.

/// Top-level error for every maintrack use-case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaintrackError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("api error")]
    Api(#[from] ApiError),
}

/// A local check rejected user input before any request was sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("one or more required fields are empty")]
    MissingFields,

    #[error("password must be at least {min} characters long")]
    PasswordTooShort { min: usize },
}

/// Failure talking to the REST backend.
///
/// Only two classes exist: the server answered with a non-success status,
/// or the exchange never produced a usable response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A response was received with a non-2xx status.
    #[error("request rejected with status {status}")]
    Http {
        status: u16,
        /// The `message` field of the JSON error body, when the server sent one.
        message: Option<String>,
    },

    /// The request did not complete, or its body could not be decoded.
    #[error("request failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// Whether this error means the request never completed.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// The server-provided message, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            Self::Transport(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_server_message_when_http_error_has_one() {
        let err = ApiError::Http {
            status: 401,
            message: Some("Senha incorreta".to_string()),
        };
        assert_eq!(err.server_message(), Some("Senha incorreta"));
        assert!(!err.is_transport());
    }

    #[test]
    fn should_ignore_empty_server_message() {
        let err = ApiError::Http {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn should_report_transport_when_request_never_completed() {
        let err = ApiError::Transport("network down".to_string());
        assert!(err.is_transport());
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn should_convert_validation_error_into_maintrack_error() {
        let err: MaintrackError = ValidationError::MissingFields.into();
        assert!(matches!(
            err,
            MaintrackError::Validation(ValidationError::MissingFields)
        ));
    }
}
