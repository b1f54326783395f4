//! Error types for the Lawbot client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown to the user for any failure that is not a validation or
/// authentication problem.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// A shared error type for every Lawbot client crate.
///
/// Variants follow the failure taxonomy of the client: local validation,
/// authentication rejections, backend rejections, transport failures and
/// overlapping calls on a single-in-flight operation slot.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum LawbotError {
    /// Input rejected locally, before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Credentials or signup rejected by the backend
    #[error("Authentication error: {message}")]
    Authentication { message: String },

    /// Non-2xx response from the backend
    #[error("Backend rejected request ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    /// Network, timeout or response decoding failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// An operation is already in flight on the same slot
    #[error("Operation already in progress: {operation}")]
    Busy { operation: String },

    /// The owning view went away before the response arrived
    #[error("Response dropped: {operation} was detached from its view")]
    Detached { operation: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LawbotError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an Authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a Rejected error
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self::Rejected { status, message }
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a Busy error
    pub fn busy(operation: impl Into<String>) -> Self {
        Self::Busy {
            operation: operation.into(),
        }
    }

    /// Creates a Detached error
    pub fn detached(operation: impl Into<String>) -> Self {
        Self::Detached {
            operation: operation.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy { .. })
    }

    pub fn is_detached(&self) -> bool {
        matches!(self, Self::Detached { .. })
    }

    /// Check if the backend answered with 401/403.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Rejected { status: 401 | 403, .. })
    }

    /// Returns the backend-provided message of a rejection, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            Self::Authentication { message } => Some(message),
            _ => None,
        }
    }

    /// The string a UI should display for this error.
    ///
    /// Validation and authentication messages are shown verbatim; every
    /// other failure collapses into [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Authentication { message } => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for LawbotError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for LawbotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for LawbotError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::Rejected {
                status: status.as_u16(),
                message: None,
            };
        }
        Self::Transport(err.to_string())
    }
}

/// A type alias for `Result<T, LawbotError>`.
pub type Result<T> = std::result::Result<T, LawbotError>;
