//! Application state and configuration for the API server

use raffle_core::{RankingPolicy, SessionValidator, StaticSessionValidator};
use raffle_db::{DbError, RaffleActions, RaffleDatabase};
use std::env;
use std::sync::Arc;
use thiserror::Error;

use crate::auth::{JwtConfig, JwtConfigError, JwtSessionValidator};

/// Default session cookie name
pub const DEFAULT_SESSION_COOKIE: &str = "raffle_session";

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    /// SQLite URL, e.g. `sqlite://raffle.db` or `sqlite::memory:`
    pub database_url: String,
    pub session_cookie: String,
    /// HS256 secret for session tokens; at least 32 bytes
    pub jwt_secret: Option<String>,
    /// Expected `iss` claim; tokens from other issuers are rejected
    pub jwt_issuer: Option<String>,
    /// Backoffice key; admin routes are refused while unset
    pub admin_api_key: Option<String>,
    pub ranking_policy: RankingPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            enable_cors: true,
            database_url: "sqlite://raffle.db".to_string(),
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
            jwt_secret: None,
            jwt_issuer: None,
            admin_api_key: None,
            ranking_policy: RankingPolicy::default(),
        }
    }
}

impl ApiConfig {
    /// Create from `RAFFLE_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary variable source; unset or unparsable
    /// values keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("RAFFLE_HOST").unwrap_or(defaults.host),
            port: lookup("RAFFLE_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            enable_cors: lookup("RAFFLE_CORS")
                .map(|s| s.to_lowercase() == "true" || s == "1")
                .unwrap_or(defaults.enable_cors),
            database_url: lookup("RAFFLE_DATABASE_URL").unwrap_or(defaults.database_url),
            session_cookie: lookup("RAFFLE_SESSION_COOKIE")
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.session_cookie),
            jwt_secret: lookup("RAFFLE_JWT_SECRET").filter(|s| !s.is_empty()),
            jwt_issuer: lookup("RAFFLE_JWT_ISSUER").filter(|s| !s.is_empty()),
            admin_api_key: lookup("RAFFLE_ADMIN_KEY").filter(|s| !s.is_empty()),
            ranking_policy: lookup("RAFFLE_RANKING_POLICY")
                .and_then(|s| RankingPolicy::parse(&s))
                .unwrap_or(defaults.ranking_policy),
        }
    }
}

/// Startup failures
#[derive(Debug, Error)]
pub enum StateError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error(transparent)]
    Jwt(#[from] JwtConfigError),
}

/// API server state
#[derive(Clone)]
pub struct AppState {
    pub actions: RaffleActions,
    /// Identity provider collaborator
    pub sessions: Arc<dyn SessionValidator>,
    pub config: Arc<ApiConfig>,
    /// API version
    pub version: String,
}

impl AppState {
    /// Connect the database, apply the schema and build the session validator
    pub async fn new(config: ApiConfig) -> Result<Self, StateError> {
        let database = RaffleDatabase::connect(&config.database_url).await?;
        database.init_schema().await?;

        let sessions: Arc<dyn SessionValidator> = match &config.jwt_secret {
            Some(secret) => {
                let mut jwt = JwtConfig::try_new(secret.clone())?;
                if let Some(issuer) = &config.jwt_issuer {
                    jwt = jwt.with_issuer(issuer.clone());
                }
                Arc::new(JwtSessionValidator::new(jwt))
            }
            None => {
                tracing::warn!("RAFFLE_JWT_SECRET not set, every session will be rejected");
                Arc::new(StaticSessionValidator::new())
            }
        };

        Ok(Self::with_parts(Arc::new(database), sessions, config))
    }

    /// Assemble state from existing parts
    pub fn with_parts(
        database: Arc<RaffleDatabase>,
        sessions: Arc<dyn SessionValidator>,
        config: ApiConfig,
    ) -> Self {
        Self {
            actions: RaffleActions::new(database, config.ranking_policy),
            sessions,
            config: Arc::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.session_cookie, "raffle_session");
        assert_eq!(config.ranking_policy, RankingPolicy::Ordinal);
        assert!(config.admin_api_key.is_none());
    }

    #[test]
    fn test_config_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("RAFFLE_HOST", "127.0.0.1"),
            ("RAFFLE_PORT", "8080"),
            ("RAFFLE_CORS", "false"),
            ("RAFFLE_ADMIN_KEY", "admin"),
            ("RAFFLE_RANKING_POLICY", "dense"),
            ("RAFFLE_JWT_SECRET", ""),
            ("RAFFLE_JWT_ISSUER", "raffle-auth"),
        ]
        .into_iter()
        .collect();

        let config = ApiConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(!config.enable_cors);
        assert_eq!(config.admin_api_key.as_deref(), Some("admin"));
        assert_eq!(config.ranking_policy, RankingPolicy::Dense);
        assert!(config.jwt_secret.is_none());
        assert_eq!(config.jwt_issuer.as_deref(), Some("raffle-auth"));
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = ApiConfig::from_lookup(|key| match key {
            "RAFFLE_PORT" => Some("not-a-port".to_string()),
            "RAFFLE_RANKING_POLICY" => Some("olympic".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 3000);
        assert_eq!(config.ranking_policy, RankingPolicy::Ordinal);
    }

    #[tokio::test]
    async fn test_short_jwt_secret_rejected() {
        let config = ApiConfig {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: Some("short".to_string()),
            ..Default::default()
        };
        assert!(matches!(AppState::new(config).await, Err(StateError::Jwt(_))));
    }
}
