//! Raffle repository implementations
//!
//! Repositories own a handle to the connection pool. Statements that must
//! run inside a caller's transaction are exposed as associated functions
//! generic over the executor (`*_on`), taking either the pool or
//! `&mut *transaction`.

mod organizer_repo;
mod participation_repo;
mod raffle_repo;
mod season_repo;
mod user_repo;

pub use organizer_repo::*;
pub use participation_repo::*;
pub use raffle_repo::*;
pub use season_repo::*;
pub use user_repo::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use std::str::FromStr;

use crate::error::{DbError, DbResult};

/// Default pool size for file-backed databases
pub const DEFAULT_MAX_CONNECTIONS: u32 = 8;

/// Raffle database - main entry point for storage operations
#[derive(Clone)]
pub struct RaffleDatabase {
    pool: SqlitePool,
    pub users: UserRepo,
    pub organizers: OrganizerRepo,
    pub seasons: SeasonRepo,
    pub raffles: RaffleRepo,
    pub participations: ParticipationRepo,
}

impl RaffleDatabase {
    /// Create a new RaffleDatabase over an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepo::new(pool.clone()),
            organizers: OrganizerRepo::new(pool.clone()),
            seasons: SeasonRepo::new(pool.clone()),
            raffles: RaffleRepo::new(pool.clone()),
            participations: ParticipationRepo::new(pool.clone()),
            pool,
        }
    }

    /// Connect to a SQLite database URL (`sqlite://raffle.db`, `sqlite::memory:`)
    ///
    /// In-memory databases live as long as their single pooled connection,
    /// so the pool is pinned to one connection that never expires.
    pub async fn connect(url: &str) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| DbError::Connection(e.to_string()))?
            .create_if_missing(true)
            .foreign_keys(true);

        let in_memory = url.contains(":memory:") || url.contains("mode=memory");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(DEFAULT_MAX_CONNECTIONS)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection(e.to_string()))?;

        tracing::debug!(url, in_memory, "Connected to database");
        Ok(Self::new(pool))
    }

    /// Fresh in-memory database with the schema applied
    pub async fn in_memory() -> DbResult<Self> {
        let db = Self::connect("sqlite::memory:").await?;
        db.init_schema().await?;
        Ok(db)
    }

    /// Get the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Begin a transaction that takes the write lock up front
    ///
    /// Read-then-write sequences must start here. A deferred transaction
    /// that later upgrades its read lock fails with `SQLITE_BUSY` under
    /// contention instead of waiting for the busy timeout.
    pub async fn begin_write(&self) -> DbResult<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin_with("BEGIN IMMEDIATE").await?)
    }

    /// Initialize the raffle schema
    pub async fn init_schema(&self) -> DbResult<()> {
        for statement in crate::schema::RAFFLE_SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| DbError::SchemaError(e.to_string()))?;
        }

        tracing::info!(statements = crate::schema::RAFFLE_SCHEMA.len(), "Raffle schema initialized");
        Ok(())
    }

    /// Check database health
    pub async fn health_check(&self) -> DbResult<bool> {
        let one: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DbError::Connection(e.to_string()))?;
        Ok(one == 1)
    }
}
