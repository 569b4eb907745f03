//! Participation repository implementation

use raffle_core::UserStats;
use sqlx::sqlite::SqlitePool;
use sqlx::{Executor, QueryBuilder, Sqlite};

use crate::entities::{Entity, ParticipationRow};
use crate::error::DbResult;

const PARTICIPATION_COLUMNS: &str = "id, raffle_id, user_id, wallet_address, transaction_hash, amount_paid, token_used, points_earned, created_at";

/// Participation Repository
#[derive(Clone)]
pub struct ParticipationRepo {
    pool: SqlitePool,
}

impl ParticipationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a participation
    ///
    /// A second row for the same (raffle, user) violates the unique
    /// constraint and surfaces as `DbError::AlreadyExists`.
    pub async fn insert_on<'c, E>(executor: E, row: &ParticipationRow) -> DbResult<()>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        let query = format!(
            "INSERT INTO {} ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            ParticipationRow::TABLE,
            PARTICIPATION_COLUMNS
        );

        sqlx::query(&query)
            .bind(&row.id)
            .bind(&row.raffle_id)
            .bind(&row.user_id)
            .bind(&row.wallet_address)
            .bind(&row.transaction_hash)
            .bind(&row.amount_paid)
            .bind(&row.token_used)
            .bind(row.points_earned)
            .bind(row.created_at)
            .execute(executor)
            .await?;

        Ok(())
    }

    /// Check whether a user entered a raffle
    pub async fn exists(&self, raffle_id: &str, user_id: &str) -> DbResult<bool> {
        Self::exists_on(&self.pool, raffle_id, user_id).await
    }

    pub async fn exists_on<'c, E>(executor: E, raffle_id: &str, user_id: &str) -> DbResult<bool>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        let query = format!(
            "SELECT COUNT(*) FROM {} WHERE raffle_id = ? AND user_id = ?",
            ParticipationRow::TABLE
        );

        let count: i64 = sqlx::query_scalar(&query)
            .bind(raffle_id)
            .bind(user_id)
            .fetch_one(executor)
            .await?;

        Ok(count > 0)
    }

    /// Derive a user's counters from their participation rows
    pub async fn aggregate_for_user(&self, user_id: &str) -> DbResult<UserStats> {
        Self::aggregate_for_user_on(&self.pool, user_id).await
    }

    pub async fn aggregate_for_user_on<'c, E>(executor: E, user_id: &str) -> DbResult<UserStats>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        let query = format!(
            "SELECT COUNT(*), COALESCE(SUM(points_earned), 0) FROM {} WHERE user_id = ?",
            ParticipationRow::TABLE
        );

        let (total_participations, total_points): (i64, i64) = sqlx::query_as(&query)
            .bind(user_id)
            .fetch_one(executor)
            .await?;

        Ok(UserStats {
            total_participations,
            total_points,
        })
    }

    /// List a user's participations, newest first
    pub async fn list_for_user(&self, user_id: &str) -> DbResult<Vec<ParticipationRow>> {
        let query = format!(
            "SELECT {} FROM {} WHERE user_id = ? ORDER BY created_at DESC, id ASC",
            PARTICIPATION_COLUMNS,
            ParticipationRow::TABLE
        );

        let rows = sqlx::query_as::<_, ParticipationRow>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Subset of `raffle_ids` the user entered
    pub async fn entered_raffles(&self, user_id: &str, raffle_ids: &[String]) -> DbResult<Vec<String>> {
        if raffle_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT raffle_id FROM {} WHERE user_id = ",
            ParticipationRow::TABLE
        ));
        builder.push_bind(user_id);
        builder.push(" AND raffle_id IN (");
        let mut separated = builder.separated(", ");
        for raffle_id in raffle_ids {
            separated.push_bind(raffle_id.as_str());
        }
        separated.push_unseparated(")");

        let entered = builder
            .build_query_scalar::<String>()
            .fetch_all(&self.pool)
            .await?;

        Ok(entered)
    }
}
