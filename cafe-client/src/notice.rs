//! User-facing notices
//!
//! Every screen action ends in exactly one notice: a success message, an
//! error message, or a request to sign in again.

use crate::ClientError;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
    /// Authentication failed; the user has to log in again
    LoginRequired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn login_required(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::LoginRequired,
            message: message.into(),
        }
    }

    /// Convert a failed call into a notice, logging it.
    ///
    /// A 401 becomes [`NoticeLevel::LoginRequired`]. Otherwise the server's
    /// own message is preferred over `fallback`.
    pub fn from_error(err: &ClientError, fallback: &str) -> Self {
        tracing::error!(error = %err, "{fallback}");
        match err {
            ClientError::Unauthorized => Self::login_required("Session expired. Please log in again."),
            ClientError::Domain(e) => Self::error(e.to_string()),
            other => Self::error(other.user_message().unwrap_or(fallback)),
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == NoticeLevel::Success
    }

    pub fn requires_login(&self) -> bool {
        self.level == NoticeLevel::LoginRequired
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::DomainError;

    #[test]
    fn test_from_error() {
        let notice = Notice::from_error(&ClientError::Unauthorized, "Failed to load");
        assert!(notice.requires_login());

        let notice = Notice::from_error(
            &ClientError::Validation("Table already booked".to_string()),
            "Reservation failed",
        );
        assert_eq!(notice, Notice::error("Table already booked"));

        let notice = Notice::from_error(&ClientError::Internal(String::new()), "Reservation failed");
        assert_eq!(notice.message, "Reservation failed");

        let notice = Notice::from_error(
            &ClientError::Domain(DomainError::MissingField("date")),
            "Reservation failed",
        );
        assert_eq!(notice.message, "date is required");
    }
}
