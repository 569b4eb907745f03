//! Raffle repository implementation

use raffle_core::RaffleStatus;
use sqlx::sqlite::SqlitePool;
use sqlx::{Executor, Row, Sqlite};

use crate::entities::{Entity, RaffleRow};
use crate::error::{DbError, DbResult};

const RAFFLE_COLUMNS: &str = "id, organizer_id, season_id, title, description, status, contract_raffle_id, ticket_price, token_symbol, created_at, updated_at";

/// Raffle Repository
#[derive(Clone)]
pub struct RaffleRepo {
    pool: SqlitePool,
}

impl RaffleRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new raffle
    pub async fn create(&self, row: &RaffleRow) -> DbResult<RaffleRow> {
        let query = format!(
            "INSERT INTO {} ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            RaffleRow::TABLE,
            RAFFLE_COLUMNS
        );

        sqlx::query(&query)
            .bind(&row.id)
            .bind(&row.organizer_id)
            .bind(&row.season_id)
            .bind(&row.title)
            .bind(&row.description)
            .bind(&row.status)
            .bind(row.contract_raffle_id)
            .bind(&row.ticket_price)
            .bind(&row.token_symbol)
            .bind(row.created_at)
            .bind(row.updated_at)
            .execute(&self.pool)
            .await?;

        Ok(row.clone())
    }

    /// Get raffle by ID
    pub async fn get_by_id(&self, raffle_id: &str) -> DbResult<Option<RaffleRow>> {
        Self::get_by_id_on(&self.pool, raffle_id).await
    }

    pub async fn get_by_id_on<'c, E>(executor: E, raffle_id: &str) -> DbResult<Option<RaffleRow>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        let query = format!("SELECT {} FROM {} WHERE id = ?", RAFFLE_COLUMNS, RaffleRow::TABLE);

        let row = sqlx::query_as::<_, RaffleRow>(&query)
            .bind(raffle_id)
            .fetch_optional(executor)
            .await?;

        Ok(row)
    }

    /// List raffles, optionally filtered by status, newest first
    pub async fn list(&self, status: Option<RaffleStatus>) -> DbResult<Vec<RaffleRow>> {
        let rows = match status {
            Some(status) => {
                let query = format!(
                    "SELECT {} FROM {} WHERE status = ? ORDER BY created_at DESC, id ASC",
                    RAFFLE_COLUMNS,
                    RaffleRow::TABLE
                );
                sqlx::query_as::<_, RaffleRow>(&query)
                    .bind(status.as_str())
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!(
                    "SELECT {} FROM {} ORDER BY created_at DESC, id ASC",
                    RAFFLE_COLUMNS,
                    RaffleRow::TABLE
                );
                sqlx::query_as::<_, RaffleRow>(&query)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows)
    }

    /// Update raffle status
    pub async fn update_status(&self, raffle_id: &str, status: RaffleStatus) -> DbResult<()> {
        let query = format!(
            "UPDATE {} SET status = ?, updated_at = ? WHERE id = ?",
            RaffleRow::TABLE
        );

        let result = sqlx::query(&query)
            .bind(status.as_str())
            .bind(chrono::Utc::now())
            .bind(raffle_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("Raffle".to_string()));
        }

        Ok(())
    }

    /// Record the on-chain raffle identifier
    pub async fn set_contract_raffle_id(&self, raffle_id: &str, contract_raffle_id: i64) -> DbResult<()> {
        let query = format!(
            "UPDATE {} SET contract_raffle_id = ?, updated_at = ? WHERE id = ?",
            RaffleRow::TABLE
        );

        let result = sqlx::query(&query)
            .bind(contract_raffle_id)
            .bind(chrono::Utc::now())
            .bind(raffle_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("Raffle".to_string()));
        }

        Ok(())
    }

    /// Fetch only the on-chain identifier with a raw statement
    ///
    /// Outer `None`: no such raffle. Inner `None`: not deployed yet.
    pub async fn contract_raffle_id(&self, raffle_id: &str) -> DbResult<Option<Option<i64>>> {
        let row = sqlx::query("SELECT contract_raffle_id FROM raffles WHERE id = ?1 LIMIT 1")
            .bind(raffle_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.try_get::<Option<i64>, _>("contract_raffle_id"))
            .transpose()
            .map_err(DbError::from)
    }
}
