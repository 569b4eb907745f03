//! Session collaborator
//!
//! Identity verification is delegated to an external provider. The core
//! only needs one operation from it: turn a session token into a verified
//! identity, or nothing.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

/// Identity information extracted from a valid session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub wallet_address: Option<String>,
    pub email: Option<String>,
    /// Whether the provider verified wallet ownership
    pub verified: bool,
}

impl Identity {
    /// Verified wallet identity
    pub fn wallet(address: impl Into<String>) -> Self {
        Self {
            wallet_address: Some(address.into()),
            email: None,
            verified: true,
        }
    }
}

/// Validates session tokens against an identity provider
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Returns the identity behind `token`, or `None` if the session is
    /// missing, expired or forged.
    async fn validate_session(&self, token: &str) -> Option<Identity>;
}

/// Fixed token table, for local development and tests
#[derive(Debug, Default)]
pub struct StaticSessionValidator {
    sessions: RwLock<HashMap<String, Identity>>,
}

impl StaticSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token
    pub fn with_session(self, token: impl Into<String>, identity: Identity) -> Self {
        self.insert(token, identity);
        self
    }

    pub fn insert(&self, token: impl Into<String>, identity: Identity) {
        if let Ok(mut sessions) = self.sessions.write() {
            sessions.insert(token.into(), identity);
        }
    }

    pub fn revoke(&self, token: &str) {
        if let Ok(mut sessions) = self.sessions.write() {
            sessions.remove(token);
        }
    }
}

#[async_trait]
impl SessionValidator for StaticSessionValidator {
    async fn validate_session(&self, token: &str) -> Option<Identity> {
        self.sessions.read().ok()?.get(token).cloned()
    }
}
