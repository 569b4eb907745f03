//! Season repository implementation

use sqlx::sqlite::SqlitePool;

use crate::entities::{Entity, SeasonRow};
use crate::error::{DbError, DbResult};

const SEASON_COLUMNS: &str = "id, name, start_date, end_date, is_active";

/// Season Repository
#[derive(Clone)]
pub struct SeasonRepo {
    pool: SqlitePool,
}

impl SeasonRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new season
    pub async fn create(&self, row: &SeasonRow) -> DbResult<SeasonRow> {
        let query = format!(
            "INSERT INTO {} ({}) VALUES (?, ?, ?, ?, ?)",
            SeasonRow::TABLE,
            SEASON_COLUMNS
        );

        sqlx::query(&query)
            .bind(&row.id)
            .bind(&row.name)
            .bind(row.start_date)
            .bind(row.end_date)
            .bind(row.is_active)
            .execute(&self.pool)
            .await?;

        Ok(row.clone())
    }

    /// Get season by ID
    pub async fn get_by_id(&self, season_id: &str) -> DbResult<Option<SeasonRow>> {
        let query = format!("SELECT {} FROM {} WHERE id = ?", SEASON_COLUMNS, SeasonRow::TABLE);

        let row = sqlx::query_as::<_, SeasonRow>(&query)
            .bind(season_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// The active season, if any
    ///
    /// Uniqueness is not verified here; with several active rows the most
    /// recently started one wins.
    pub async fn current(&self) -> DbResult<Option<SeasonRow>> {
        let query = format!(
            "SELECT {} FROM {} WHERE is_active = 1 ORDER BY start_date DESC, id ASC LIMIT 1",
            SEASON_COLUMNS,
            SeasonRow::TABLE
        );

        let row = sqlx::query_as::<_, SeasonRow>(&query)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// All seasons, latest first
    pub async fn list(&self) -> DbResult<Vec<SeasonRow>> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY start_date DESC, id ASC",
            SEASON_COLUMNS,
            SeasonRow::TABLE
        );

        let rows = sqlx::query_as::<_, SeasonRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Make `season_id` the only active season
    pub async fn activate(&self, season_id: &str) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        let activate = format!("UPDATE {} SET is_active = 1 WHERE id = ?", SeasonRow::TABLE);
        let result = sqlx::query(&activate)
            .bind(season_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(DbError::NotFound("Season".to_string()));
        }

        let deactivate = format!(
            "UPDATE {} SET is_active = 0 WHERE id != ? AND is_active = 1",
            SeasonRow::TABLE
        );
        sqlx::query(&deactivate)
            .bind(season_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
