//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::controller::Phase;

/// Input rejected before any request is sent.
///
/// These are user mistakes: the front-end shows them in a blocking dialog
/// and the user re-triggers the action.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ValidationError {
    /// The topic is empty or whitespace only
    #[error("Topic is empty")]
    EmptyTopic,

    /// `generate` requested with no keyword selected
    #[error("Select at least one keyword")]
    NoKeywordSelected,

    /// `generate` requested with no title selected
    #[error("Select a title")]
    NoTitleSelected,

    /// Keyword index outside the loaded catalog
    #[error("Keyword index {index} out of range (0..{len})")]
    KeywordIndexOutOfRange { index: usize, len: usize },

    /// Title index outside the loaded catalog
    #[error("Title index {index} out of range (0..{len})")]
    TitleIndexOutOfRange { index: usize, len: usize },
}

/// A call to the analysis backend failed.
///
/// Every variant carries the endpoint path (`/analyze`, `/generate`) that
/// produced it. None of them is retried automatically.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code")]
pub enum RequestError {
    /// Connection refused, DNS failure, body read failure, timeout
    #[error("[{endpoint}] Network error: {detail}")]
    Network { endpoint: String, detail: String },

    /// The backend answered with a non-success status
    #[error("[{endpoint}] HTTP {status}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The response body is not the expected JSON shape
    #[error("[{endpoint}] Invalid response: {detail}")]
    Parse { endpoint: String, detail: String },

    /// The request body could not be encoded
    #[error("[{endpoint}] Serialization error: {detail}")]
    Serialization { endpoint: String, detail: String },
}

impl RequestError {
    /// Endpoint that produced the error.
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Network { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Parse { endpoint, .. }
            | Self::Serialization { endpoint, .. } => endpoint,
        }
    }
}

/// Selection controller error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum SelectorError {
    /// User input rejected
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Backend call failed
    #[error("{0}")]
    Request(#[from] RequestError),

    /// The operation is not allowed in the current phase
    #[error("Cannot {action} while {phase:?}")]
    InvalidTransition { phase: Phase, action: &'static str },
}

impl SelectorError {
    /// Whether it is expected behavior (user input), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidTransition { .. })
    }

    /// Whether the error should reach the user as a blocking notification.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Request(_))
    }
}

/// Selector Result type alias
pub type SelectorResult<T> = std::result::Result<T, SelectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_expected() {
        let err = SelectorError::from(ValidationError::EmptyTopic);
        assert!(err.is_expected());
        assert!(err.is_user_facing());
    }

    #[test]
    fn request_errors_are_not_expected() {
        let err = SelectorError::from(RequestError::Status {
            endpoint: "/analyze".to_string(),
            status: 500,
            body: String::new(),
        });
        assert!(!err.is_expected());
        assert!(err.is_user_facing());
        assert_eq!(err.to_string(), "[/analyze] HTTP 500");
    }

    #[test]
    fn invalid_transition_is_hidden() {
        let err = SelectorError::InvalidTransition {
            phase: Phase::Analyzing,
            action: "generate",
        };
        assert!(!err.is_user_facing());
        assert_eq!(err.to_string(), "Cannot generate while Analyzing");
    }

    #[test]
    fn request_error_endpoint() {
        let err = RequestError::Network {
            endpoint: "/generate".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(err.endpoint(), "/generate");
    }
}
