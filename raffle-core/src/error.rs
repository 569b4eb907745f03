//! Error taxonomy for raffle actions
//!
//! Every failure that can reach the action boundary is one of these kinds.
//! The envelope carries the kind alongside the user-facing message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure category surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    InvalidState,
    Conflict,
    Validation,
    Unauthorized,
    Internal,
}

impl ErrorKind {
    /// Get the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::InvalidState => "INVALID_STATE",
            Self::Conflict => "CONFLICT",
            Self::Validation => "VALIDATION",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Internal => "INTERNAL",
        }
    }

    /// Expected business outcomes, as opposed to faults
    pub fn is_expected(&self) -> bool {
        !matches!(self, Self::Internal)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by raffle actions
#[derive(Error, Debug)]
pub enum ActionError {
    /// Referenced entity does not exist
    #[error("{entity} not found")]
    NotFound { entity: String, id: String },

    /// Entity exists but is not in a state that allows the operation
    #[error("{0}")]
    InvalidState(String),

    /// Duplicate participation, duplicate user, ...
    #[error("{0}")]
    Conflict(String),

    /// Input validation failed, one entry per offending field
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Missing or invalid session
    #[error("{0}")]
    Unauthorized(String),

    /// Storage or other infrastructure failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ActionError {
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Single-field validation failure
    pub fn invalid_field(field: &str, message: impl std::fmt::Display) -> Self {
        Self::Validation(vec![format!("{}: {}", field, message)])
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidState(_) => ErrorKind::InvalidState,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Unauthorized(_) => ErrorKind::Unauthorized,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// Result type alias for raffle actions
pub type ActionOutcome<T> = Result<T, ActionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(ActionError::not_found("Raffle", "r1").kind(), ErrorKind::NotFound);
        assert_eq!(ActionError::invalid_state("closed").kind(), ErrorKind::InvalidState);
        assert_eq!(ActionError::conflict("dup").kind(), ErrorKind::Conflict);
        assert_eq!(ActionError::invalid_field("email", "bad").kind(), ErrorKind::Validation);
        assert_eq!(ActionError::unauthorized("no session").kind(), ErrorKind::Unauthorized);
        assert_eq!(ActionError::internal("db down").kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ActionError::not_found("Raffle", "r1").to_string(), "Raffle not found");
        let err = ActionError::Validation(vec![
            "email: invalid".to_string(),
            "amount_paid: must be a decimal".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: email: invalid; amount_paid: must be a decimal"
        );
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&ErrorKind::InvalidState).unwrap();
        assert_eq!(json, "\"INVALID_STATE\"");
        assert!(ErrorKind::Conflict.is_expected());
        assert!(!ErrorKind::Internal.is_expected());
    }
}
