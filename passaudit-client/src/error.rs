//! Error types for assessment submissions.

use std::time::Duration;

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while submitting a password for assessment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input was rejected locally; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request failed or the scoring service reported a failure.
    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Local input validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The password field was empty.
    #[error("password is required")]
    EmptyPassword,
}

/// Coarse classification of a [`RequestError`], used for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestErrorKind {
    /// Connection or I/O failure before a response was read.
    Transport,
    /// The service answered with a non-success status.
    Rejected,
    /// The service answered with a body that is not a valid assessment.
    Malformed,
    /// No answer arrived within the caller's deadline.
    TimedOut,
}

/// A failed request, carrying the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestError {
    kind: RequestErrorKind,
    status: Option<u16>,
    message: String,
}

impl RequestError {
    /// Connection-level failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: RequestErrorKind::Transport,
            status: None,
            message: message.into(),
        }
    }

    /// Non-success status. Uses the service's own `error` string when it sent
    /// one, otherwise a generic message naming the status.
    pub fn rejected(status: u16, error: Option<String>) -> Self {
        let message = match error {
            Some(error) if !error.trim().is_empty() => error,
            _ => format!("scoring service returned status {}", status),
        };
        Self {
            kind: RequestErrorKind::Rejected,
            status: Some(status),
            message,
        }
    }

    /// Success status but the body did not describe an assessment.
    pub fn malformed(detail: impl std::fmt::Display) -> Self {
        Self {
            kind: RequestErrorKind::Malformed,
            status: None,
            message: format!("unexpected response from scoring service: {}", detail),
        }
    }

    /// The caller gave up waiting.
    pub fn timed_out(after: Duration) -> Self {
        Self {
            kind: RequestErrorKind::TimedOut,
            status: None,
            message: format!(
                "scoring service did not respond within {}s",
                after.as_secs_f64()
            ),
        }
    }

    pub fn kind(&self) -> RequestErrorKind {
        self.kind
    }

    /// HTTP status, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Human-readable reason for the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = Error::from(ValidationError::EmptyPassword);
        assert_eq!(err.to_string(), "password is required");
    }

    #[test]
    fn rejected_uses_service_message() {
        let err = RequestError::rejected(500, Some("internal failure".to_string()));
        assert_eq!(err.message(), "internal failure");
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.kind(), RequestErrorKind::Rejected);
    }

    #[test]
    fn rejected_without_message_names_status() {
        let err = RequestError::rejected(502, None);
        assert_eq!(err.message(), "scoring service returned status 502");
    }

    #[test]
    fn rejected_with_blank_message_names_status() {
        let err = RequestError::rejected(400, Some("  ".to_string()));
        assert!(err.message().contains("400"));
    }

    #[test]
    fn timed_out_mentions_deadline() {
        let err = RequestError::timed_out(Duration::from_secs(30));
        assert_eq!(err.kind(), RequestErrorKind::TimedOut);
        assert!(err.message().contains("30s"), "got: {}", err.message());
    }

    #[test]
    fn request_error_display_is_message() {
        let err = Error::from(RequestError::transport("connection refused"));
        assert_eq!(err.to_string(), "connection refused");
    }
}
