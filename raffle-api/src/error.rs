//! API Error types
//!
//! Every response body is an action envelope. Errors raised before an
//! action runs (bad JSON, missing session, failed DTO validation) are
//! folded into the same `{"ok": false, "message", "kind"}` shape.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use raffle_core::{ActionError, ActionResult, ErrorKind};
use serde::Serialize;
use thiserror::Error;

/// HTTP status for a failure kind
pub fn status_for_kind(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::InvalidState => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation error: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error(transparent)]
    Action(#[from] ActionError),

    /// Failure already folded into an envelope by an earlier action
    #[error("{message}")]
    Rejected { kind: ErrorKind, message: String },
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => ErrorKind::Validation,
            ApiError::Unauthorized(_) => ErrorKind::Unauthorized,
            ApiError::Action(e) => e.kind(),
            ApiError::Rejected { kind, .. } => *kind,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        status_for_kind(self.kind())
    }

    /// Get the error code string
    pub fn error_code(&self) -> &'static str {
        self.kind().as_str()
    }

    fn into_envelope(self) -> ActionResult<()> {
        let error = match self {
            ApiError::BadRequest(msg) => ActionError::Validation(vec![msg]),
            ApiError::Unauthorized(msg) => ActionError::Unauthorized(msg),
            ApiError::Validation(errors) => ActionError::Validation(errors),
            ApiError::Action(e) => e,
            ApiError::Rejected { kind, message } => return ActionResult::Err { message, kind },
        };
        ActionResult::fail(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, code = self.error_code(), "Request rejected");
        }

        let body = self.into_envelope();
        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let detail = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("failed {} check", e.code));
                    format!("{}: {}", field, detail)
                })
            })
            .collect();
        messages.sort();
        ApiError::Validation(messages)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Unwrap a successful envelope, or carry its failure forward
pub fn require<T>(result: ActionResult<T>) -> ApiResult<T> {
    match result {
        ActionResult::Ok { data } => Ok(data),
        ActionResult::Err { message, kind } => Err(ApiError::Rejected { kind, message }),
    }
}

/// Envelope response: the action result as body, its kind as status
#[derive(Debug)]
pub struct Envelope<T>(pub ActionResult<T>);

impl<T> From<ActionResult<T>> for Envelope<T> {
    fn from(result: ActionResult<T>) -> Self {
        Envelope(result)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = match self.0.kind() {
            Some(kind) => status_for_kind(kind),
            None => StatusCode::OK,
        };
        (status, Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for_kind(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for_kind(ErrorKind::Conflict), StatusCode::CONFLICT);
        assert_eq!(
            status_for_kind(ErrorKind::InvalidState),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(status_for_kind(ErrorKind::Validation), StatusCode::BAD_REQUEST);
        assert_eq!(status_for_kind(ErrorKind::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_for_kind(ErrorKind::Internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_codes() {
        let err = ApiError::Unauthorized("no session".to_string());
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.error_code(), "UNAUTHORIZED");

        let err: ApiError = ActionError::conflict("dup").into();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), "CONFLICT");
    }

    #[test]
    fn test_require_keeps_kind() {
        let failed: ActionResult<u32> = ActionResult::fail(ActionError::not_found("User", "u1"));
        let err = require(failed).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "User not found");
        assert_eq!(require(ActionResult::ok(5)).unwrap(), 5);
    }

    #[test]
    fn test_validation_errors_per_field() {
        let probe = Probe { name: String::new() };
        let err: ApiError = probe.validate().unwrap_err().into();
        match err {
            ApiError::Validation(messages) => {
                assert_eq!(messages, vec!["name: must not be empty".to_string()]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
