//! Notification and confirmation dialogs shared by the CRUD pages.

use maintrack_domain::error::ApiError;

use crate::messages;

/// Icon and colour of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS modifier class, e.g. `notification-icon success`.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A modal dialog with a single OK button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: messages::TITLE_SUCCESS.to_string(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: messages::TITLE_ERROR.to_string(),
            message: message.into(),
        }
    }

    /// The fixed dialog for requests that never completed.
    #[must_use]
    pub fn connection_error() -> Self {
        Self {
            kind: NotificationKind::Error,
            title: messages::TITLE_CONNECTION_ERROR.to_string(),
            message: messages::CHECK_CONNECTION.to_string(),
        }
    }

    /// Dialog for a failed request: the server's message when it sent one,
    /// `fallback` otherwise, or the connection dialog for transport failures.
    #[must_use]
    pub fn from_api_error(err: &ApiError, fallback: &str) -> Self {
        if err.is_transport() {
            return Self::connection_error();
        }
        Self::error(err.server_message().unwrap_or(fallback))
    }
}

/// A pending Cancel/Confirm dialog guarding an action on `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation<T> {
    pub title: String,
    pub message: String,
    pub target: T,
}
