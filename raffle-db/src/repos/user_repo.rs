//! User repository implementation

use raffle_core::UserStats;
use sqlx::sqlite::SqlitePool;
use sqlx::{Executor, Sqlite};

use crate::entities::{Entity, UserRow};
use crate::error::{DbError, DbResult};

const USER_COLUMNS: &str = "id, wallet_address, email, username, total_participations, total_points, created_at, updated_at";

/// User Repository
#[derive(Clone)]
pub struct UserRepo {
    pool: SqlitePool,
}

impl UserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user
    pub async fn create(&self, row: &UserRow) -> DbResult<UserRow> {
        let query = format!(
            "INSERT INTO {} ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            UserRow::TABLE,
            USER_COLUMNS
        );

        sqlx::query(&query)
            .bind(&row.id)
            .bind(&row.wallet_address)
            .bind(&row.email)
            .bind(&row.username)
            .bind(row.total_participations)
            .bind(row.total_points)
            .bind(row.created_at)
            .bind(row.updated_at)
            .execute(&self.pool)
            .await?;

        Ok(row.clone())
    }

    /// Get user by ID
    pub async fn get_by_id(&self, user_id: &str) -> DbResult<Option<UserRow>> {
        Self::get_by_id_on(&self.pool, user_id).await
    }

    pub async fn get_by_id_on<'c, E>(executor: E, user_id: &str) -> DbResult<Option<UserRow>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        let query = format!("SELECT {} FROM {} WHERE id = ?", USER_COLUMNS, UserRow::TABLE);

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(user_id)
            .fetch_optional(executor)
            .await?;

        Ok(row)
    }

    /// Get user by wallet address
    pub async fn get_by_wallet(&self, wallet_address: &str) -> DbResult<Option<UserRow>> {
        let query = format!(
            "SELECT {} FROM {} WHERE wallet_address = ?",
            USER_COLUMNS,
            UserRow::TABLE
        );

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(wallet_address)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Get user by email
    pub async fn get_by_email(&self, email: &str) -> DbResult<Option<UserRow>> {
        let query = format!("SELECT {} FROM {} WHERE email = ?", USER_COLUMNS, UserRow::TABLE);

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Overwrite the aggregate counters
    pub async fn update_stats(&self, user_id: &str, stats: UserStats) -> DbResult<()> {
        Self::update_stats_on(&self.pool, user_id, stats).await
    }

    pub async fn update_stats_on<'c, E>(executor: E, user_id: &str, stats: UserStats) -> DbResult<()>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        let query = format!(
            "UPDATE {} SET total_participations = ?, total_points = ?, updated_at = ? WHERE id = ?",
            UserRow::TABLE
        );

        let result = sqlx::query(&query)
            .bind(stats.total_participations)
            .bind(stats.total_points)
            .bind(chrono::Utc::now())
            .bind(user_id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("User".to_string()));
        }

        Ok(())
    }
}
