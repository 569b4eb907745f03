//! Session authentication
//!
//! Sessions are HS256 JWTs issued by the identity provider. The token is
//! read from the session cookie or from an `Authorization: Bearer` header:
//!
//! ```text
//! Cookie: raffle_session=<token>
//! Authorization: Bearer <token>
//! ```
//!
//! Backoffice routes use a static key instead:
//!
//! ```text
//! X-Admin-Key: <key>
//! ```

use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use raffle_core::{Identity, SessionValidator};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Header carrying the backoffice key
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// JWT configuration error
#[derive(Debug, Clone, Error)]
#[error("JWT config error: {message}")]
pub struct JwtConfigError {
    pub message: String,
}

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for HS256
    pub secret: String,
    pub algorithm: Algorithm,
    /// Issuer to validate
    pub issuer: Option<String>,
}

impl JwtConfig {
    /// Minimum secret length for security
    pub const MIN_SECRET_LENGTH: usize = 32;

    /// Create a new JWT config, rejecting secrets shorter than 32 bytes
    pub fn try_new(secret: impl Into<String>) -> Result<Self, JwtConfigError> {
        let secret = secret.into();
        if secret.len() < Self::MIN_SECRET_LENGTH {
            return Err(JwtConfigError {
                message: format!(
                    "JWT secret must be at least {} bytes. Got {} bytes.",
                    Self::MIN_SECRET_LENGTH,
                    secret.len()
                ),
            });
        }
        Ok(Self {
            secret,
            algorithm: Algorithm::HS256,
            issuer: None,
        })
    }

    /// Set issuer validation
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }
}

/// Session claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Wallet address
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Whether the provider verified wallet ownership
    #[serde(default)]
    pub verified: bool,
}

impl From<SessionClaims> for Identity {
    fn from(claims: SessionClaims) -> Self {
        Identity {
            wallet_address: Some(claims.sub).filter(|s| !s.is_empty()),
            email: claims.email,
            verified: claims.verified,
        }
    }
}

/// Session validator backed by signed JWTs
#[derive(Debug, Clone)]
pub struct JwtSessionValidator {
    config: JwtConfig,
}

impl JwtSessionValidator {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Sign a session token for `identity`, valid for `ttl`
    pub fn issue_token(
        &self,
        identity: &Identity,
        ttl: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let claims = SessionClaims {
            sub: identity.wallet_address.clone().unwrap_or_default(),
            exp: (now + ttl).timestamp().max(0) as u64,
            iat: now.timestamp().max(0) as u64,
            iss: self.config.issuer.clone(),
            email: identity.email.clone(),
            verified: identity.verified,
        };

        encode(
            &Header::new(self.config.algorithm),
            &claims,
            &EncodingKey::from_secret(self.config.secret.as_bytes()),
        )
    }

    /// Decode and verify a token
    pub fn decode_claims(&self, token: &str) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(self.config.algorithm);
        if let Some(ref iss) = self.config.issuer {
            validation.set_issuer(&[iss]);
            validation.set_required_spec_claims(&["exp", "iss"]);
        }

        let key = DecodingKey::from_secret(self.config.secret.as_bytes());
        decode::<SessionClaims>(token, &key, &validation).map(|data| data.claims)
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate_session(&self, token: &str) -> Option<Identity> {
        match self.decode_claims(token) {
            Ok(claims) => Some(claims.into()),
            Err(e) => {
                tracing::debug!(error = %e, "Session token rejected");
                None
            }
        }
    }
}

/// Extract the token from an `Authorization: Bearer` value
pub fn extract_bearer(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Find a cookie value by name
pub fn extract_cookie<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
        .filter(|v| !v.is_empty())
}

/// Session token from the cookie, falling back to the bearer header
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let from_cookie = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|value| extract_cookie(value, cookie_name));
    if let Some(token) = from_cookie {
        return Some(token.to_string());
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer)
        .map(str::to_string)
}

/// Constant-time comparison for the admin key
pub fn admin_key_matches(expected: &str, provided: &str) -> bool {
    let (a, b) = (expected.as_bytes(), provided.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
