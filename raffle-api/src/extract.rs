//! Request extractors
//!
//! - [`CurrentIdentity`] resolves the session through the identity provider
//! - [`AdminKey`] guards backoffice routes
//! - [`ValidatedJson`] / [`ValidatedQuery`] run `validator` rules after
//!   deserialization

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use raffle_core::Identity;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::auth::{admin_key_matches, session_token, ADMIN_KEY_HEADER};
use crate::error::ApiError;
use crate::state::AppState;

/// Identity behind the request's session
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Identity);

#[async_trait]
impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers, &state.config.session_cookie)
            .ok_or_else(|| ApiError::Unauthorized("Session is required".to_string()))?;

        let identity = state
            .sessions
            .validate_session(&token)
            .await
            .ok_or_else(|| ApiError::Unauthorized("Invalid or expired session".to_string()))?;

        Ok(CurrentIdentity(identity))
    }
}

/// Proof that the request carried the backoffice key
#[derive(Debug, Clone, Copy)]
pub struct AdminKey;

#[async_trait]
impl FromRequestParts<AppState> for AdminKey {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let expected = state
            .config
            .admin_api_key
            .as_deref()
            .ok_or_else(|| ApiError::Unauthorized("Admin API is disabled".to_string()))?;

        let provided = parts
            .headers
            .get(ADMIN_KEY_HEADER)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Admin key is required".to_string()))?;

        if !admin_key_matches(expected, provided) {
            tracing::warn!(path = %parts.uri.path(), "Invalid admin key");
            return Err(ApiError::Unauthorized("Invalid admin key".to_string()));
        }

        Ok(AdminKey)
    }
}

/// JSON body that passed its validation rules
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Query string that passed its validation rules
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}
