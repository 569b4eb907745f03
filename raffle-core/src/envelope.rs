//! Action result envelope
//!
//! Every action returns either `{"ok": true, "data": ...}` or
//! `{"ok": false, "message": ..., "kind": ...}`. Failures never cross the
//! boundary as errors: [`ActionResult::from_outcome`] logs them and folds
//! them into the failure variant.

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ActionError, ActionOutcome, ErrorKind};

/// Message shown to callers for internal faults; details stay in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Uniform success/error wrapper returned by every action
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult<T> {
    Ok { data: T },
    Err { message: String, kind: ErrorKind },
}

impl<T> ActionResult<T> {
    /// Wrap a successful value
    pub fn ok(data: T) -> Self {
        Self::Ok { data }
    }

    /// Convert an error without logging it
    pub fn fail(error: ActionError) -> Self {
        let kind = error.kind();
        let message = match kind {
            ErrorKind::Internal => INTERNAL_ERROR_MESSAGE.to_string(),
            _ => error.to_string(),
        };
        Self::Err { message, kind }
    }

    /// Fold an action outcome into the envelope, logging failures
    pub fn from_outcome(operation: &'static str, outcome: ActionOutcome<T>) -> Self {
        match outcome {
            Ok(data) => Self::Ok { data },
            Err(error) => {
                let kind = error.kind();
                if kind.is_expected() {
                    tracing::warn!(
                        operation,
                        kind = %kind,
                        error = %error,
                        "Action rejected"
                    );
                } else {
                    let backtrace = std::backtrace::Backtrace::capture();
                    tracing::error!(
                        operation,
                        error = ?error,
                        backtrace = %backtrace,
                        "Action failed"
                    );
                }
                Self::fail(error)
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ok { data } => Some(data),
            Self::Err { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Ok { data } => Some(data),
            Self::Err { .. } => None,
        }
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Ok { .. } => None,
            Self::Err { kind, .. } => Some(*kind),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Ok { .. } => None,
            Self::Err { message, .. } => Some(message),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ActionResult<U> {
        match self {
            Self::Ok { data } => ActionResult::Ok { data: f(data) },
            Self::Err { message, kind } => ActionResult::Err { message, kind },
        }
    }
}

impl<T: Serialize> Serialize for ActionResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Ok { data } => {
                let mut state = serializer.serialize_struct("ActionResult", 2)?;
                state.serialize_field("ok", &true)?;
                state.serialize_field("data", data)?;
                state.end()
            }
            Self::Err { message, kind } => {
                let mut state = serializer.serialize_struct("ActionResult", 3)?;
                state.serialize_field("ok", &false)?;
                state.serialize_field("message", message)?;
                state.serialize_field("kind", kind)?;
                state.end()
            }
        }
    }
}

#[derive(Deserialize)]
struct RawEnvelope {
    ok: bool,
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    kind: Option<ErrorKind>,
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ActionResult<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEnvelope::deserialize(deserializer)?;
        if raw.ok {
            // `data: null` is a valid success payload for optional results
            let value = raw.data.unwrap_or(serde_json::Value::Null);
            let data = serde_json::from_value(value).map_err(D::Error::custom)?;
            Ok(Self::Ok { data })
        } else {
            Ok(Self::Err {
                message: raw.message.unwrap_or_default(),
                kind: raw.kind.unwrap_or(ErrorKind::Internal),
            })
        }
    }
}

impl<T> From<ActionOutcome<T>> for ActionResult<T> {
    fn from(outcome: ActionOutcome<T>) -> Self {
        match outcome {
            Ok(data) => Self::Ok { data },
            Err(error) => Self::fail(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let result = ActionResult::ok(json!({ "participation_id": "p1" }));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, json!({ "ok": true, "data": { "participation_id": "p1" } }));
    }

    #[test]
    fn test_failure_shape() {
        let result: ActionResult<()> =
            ActionResult::from_outcome("test", Err(ActionError::conflict("already participated")));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({ "ok": false, "message": "already participated", "kind": "CONFLICT" })
        );
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let result: ActionResult<()> =
            ActionResult::from_outcome("test", Err(ActionError::internal("disk I/O error")));
        assert_eq!(result.message(), Some(INTERNAL_ERROR_MESSAGE));
        assert_eq!(result.kind(), Some(ErrorKind::Internal));
    }

    #[test]
    fn test_null_data_is_success() {
        let result: ActionResult<Option<String>> =
            serde_json::from_value(json!({ "ok": true, "data": null })).unwrap();
        assert_eq!(result, ActionResult::Ok { data: None });
    }

    #[test]
    fn test_deserialize_failure() {
        let result: ActionResult<u32> = serde_json::from_value(
            json!({ "ok": false, "message": "Raffle not found", "kind": "NOT_FOUND" }),
        )
        .unwrap();
        assert!(!result.is_ok());
        assert_eq!(result.kind(), Some(ErrorKind::NotFound));
        assert_eq!(result.message(), Some("Raffle not found"));
    }

    #[test]
    fn test_map() {
        let result = ActionResult::ok(2).map(|n| n * 10);
        assert_eq!(result.into_data(), Some(20));
    }
}
