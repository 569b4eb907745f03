//! Organizer repository implementation
//!
//! Ranking queries project public columns only. Wallet, email and password
//! hash never leave this module through a ranking.

use chrono::Utc;
use sqlx::sqlite::SqlitePool;

use crate::entities::{Entity, OrganizerRow, OrganizerSeasonStatsRow, RankingRow};
use crate::error::{DbError, DbResult};

const ORGANIZER_COLUMNS: &str = "id, name, wallet_address, email, password_hash, logo_url, total_chz_engaged, created_at, updated_at";

/// Organizer Repository
#[derive(Clone)]
pub struct OrganizerRepo {
    pool: SqlitePool,
}

impl OrganizerRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new organizer
    pub async fn create(&self, row: &OrganizerRow) -> DbResult<OrganizerRow> {
        let query = format!(
            "INSERT INTO {} ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            OrganizerRow::TABLE,
            ORGANIZER_COLUMNS
        );

        sqlx::query(&query)
            .bind(&row.id)
            .bind(&row.name)
            .bind(&row.wallet_address)
            .bind(&row.email)
            .bind(&row.password_hash)
            .bind(&row.logo_url)
            .bind(&row.total_chz_engaged)
            .bind(row.created_at)
            .bind(row.updated_at)
            .execute(&self.pool)
            .await?;

        Ok(row.clone())
    }

    /// Get organizer by ID
    pub async fn get_by_id(&self, organizer_id: &str) -> DbResult<Option<OrganizerRow>> {
        let query = format!(
            "SELECT {} FROM {} WHERE id = ?",
            ORGANIZER_COLUMNS,
            OrganizerRow::TABLE
        );

        let row = sqlx::query_as::<_, OrganizerRow>(&query)
            .bind(organizer_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Organizers ordered by engaged total, highest first
    ///
    /// Totals are decimal strings; the numeric ordering here is approximate
    /// and equal totals fall back to id order. Exact ordering happens when
    /// the rows are ranked.
    pub async fn ranking(&self) -> DbResult<Vec<RankingRow>> {
        let query = format!(
            "SELECT id AS organizer_id, name, logo_url, total_chz_engaged FROM {} \
             ORDER BY CAST(total_chz_engaged AS REAL) DESC, id ASC",
            OrganizerRow::TABLE
        );

        let rows = sqlx::query_as::<_, RankingRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// One season's stats joined with organizers, highest first
    pub async fn season_ranking(&self, season_id: &str) -> DbResult<Vec<RankingRow>> {
        let query = format!(
            "SELECT o.id AS organizer_id, o.name, o.logo_url, s.total_chz_engaged \
             FROM {} s JOIN {} o ON o.id = s.organizer_id \
             WHERE s.season_id = ? \
             ORDER BY CAST(s.total_chz_engaged AS REAL) DESC, o.id ASC",
            OrganizerSeasonStatsRow::TABLE,
            OrganizerRow::TABLE
        );

        let rows = sqlx::query_as::<_, RankingRow>(&query)
            .bind(season_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Overwrite an organizer's accumulated engaged total
    pub async fn set_total_engaged(&self, organizer_id: &str, total: &str) -> DbResult<()> {
        let query = format!(
            "UPDATE {} SET total_chz_engaged = ?, updated_at = ? WHERE id = ?",
            OrganizerRow::TABLE
        );

        let result = sqlx::query(&query)
            .bind(total)
            .bind(Utc::now())
            .bind(organizer_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("Organizer".to_string()));
        }

        Ok(())
    }

    /// Insert or overwrite an organizer's total for a season
    pub async fn upsert_season_stats(
        &self,
        organizer_id: &str,
        season_id: &str,
        total: &str,
    ) -> DbResult<OrganizerSeasonStatsRow> {
        let row = OrganizerSeasonStatsRow {
            organizer_id: organizer_id.to_string(),
            season_id: season_id.to_string(),
            total_chz_engaged: total.to_string(),
            updated_at: Utc::now(),
        };

        let query = format!(
            "INSERT INTO {} (organizer_id, season_id, total_chz_engaged, updated_at) VALUES (?, ?, ?, ?) \
             ON CONFLICT (organizer_id, season_id) DO UPDATE SET \
             total_chz_engaged = excluded.total_chz_engaged, updated_at = excluded.updated_at",
            OrganizerSeasonStatsRow::TABLE
        );

        sqlx::query(&query)
            .bind(&row.organizer_id)
            .bind(&row.season_id)
            .bind(&row.total_chz_engaged)
            .bind(row.updated_at)
            .execute(&self.pool)
            .await?;

        Ok(row)
    }
}
