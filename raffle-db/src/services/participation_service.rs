//! Participation Service Implementation
//!
//! Records raffle entries and keeps the user counters consistent with the
//! participation table.

use raffle_core::{
    ActionError, ActionOutcome, NewParticipation, ParticipationReceipt, UserStats,
    POINTS_PER_PARTICIPATION,
};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::{normalize_wallet, require_amount, require_text};
use crate::entities::ParticipationRow;
use crate::error::DbError;
use crate::repos::{ParticipationRepo, RaffleDatabase, RaffleRepo, UserRepo};

const ALREADY_PARTICIPATED: &str = "You have already participated in this raffle";

/// Participation Service
pub struct ParticipationService {
    database: Arc<RaffleDatabase>,
}

impl ParticipationService {
    /// Create a new Participation Service
    pub fn new(database: Arc<RaffleDatabase>) -> Self {
        Self { database }
    }

    /// Record a user's entry into a raffle
    ///
    /// Checks run in order and stop at the first failure: the raffle must
    /// exist, be `ACTIVE`, and not already hold an entry for this user. The
    /// insert and the counter refresh share one transaction; a concurrent
    /// duplicate waits on the write lock, then fails the duplicate check.
    pub async fn create_participation(
        &self,
        input: NewParticipation,
    ) -> ActionOutcome<ParticipationReceipt> {
        let input = Self::validate(input)?;

        let mut tx = self.database.begin_write().await?;

        let raffle = RaffleRepo::get_by_id_on(&mut *tx, &input.raffle_id)
            .await?
            .ok_or_else(|| ActionError::not_found("Raffle", &input.raffle_id))?;

        if !raffle.status()?.accepts_participations() {
            return Err(ActionError::invalid_state("Raffle is not active"));
        }

        if ParticipationRepo::exists_on(&mut *tx, &input.raffle_id, &input.user_id).await? {
            return Err(ActionError::conflict(ALREADY_PARTICIPATED));
        }

        if UserRepo::get_by_id_on(&mut *tx, &input.user_id).await?.is_none() {
            return Err(ActionError::not_found("User", &input.user_id));
        }

        let row = ParticipationRow::new(input, POINTS_PER_PARTICIPATION);
        ParticipationRepo::insert_on(&mut *tx, &row)
            .await
            .map_err(|e| match e {
                DbError::AlreadyExists(_) => ActionError::conflict(ALREADY_PARTICIPATED),
                other => other.into(),
            })?;

        let stats = ParticipationRepo::aggregate_for_user_on(&mut *tx, &row.user_id).await?;
        UserRepo::update_stats_on(&mut *tx, &row.user_id, stats).await?;

        tx.commit().await.map_err(DbError::from)?;

        tracing::info!(
            participation_id = %row.id,
            raffle_id = %row.raffle_id,
            user_id = %row.user_id,
            total_participations = stats.total_participations,
            "Participation recorded"
        );

        Ok(ParticipationReceipt {
            participation_id: row.id,
        })
    }

    /// Overwrite a user's counters with values derived from their rows
    pub async fn recompute_user_stats(&self, user_id: &str) -> ActionOutcome<UserStats> {
        let stats = self.database.participations.aggregate_for_user(user_id).await?;
        self.database
            .users
            .update_stats(user_id, stats)
            .await
            .map_err(|e| match e {
                DbError::NotFound(_) => ActionError::not_found("User", user_id),
                other => other.into(),
            })?;

        tracing::debug!(
            user_id,
            total_participations = stats.total_participations,
            total_points = stats.total_points,
            "User stats recomputed"
        );
        Ok(stats)
    }

    /// Whether the user entered the raffle
    pub async fn has_user_participated(&self, raffle_id: &str, user_id: &str) -> ActionOutcome<bool> {
        Ok(self.database.participations.exists(raffle_id, user_id).await?)
    }

    /// Participation flag for each requested raffle
    ///
    /// Every requested id is present in the result; an empty request is
    /// answered without a query.
    pub async fn get_user_participations_for_raffles(
        &self,
        user_id: &str,
        raffle_ids: &[String],
    ) -> ActionOutcome<BTreeMap<String, bool>> {
        if raffle_ids.is_empty() {
            return Ok(BTreeMap::new());
        }

        let mut flags: BTreeMap<String, bool> =
            raffle_ids.iter().map(|id| (id.clone(), false)).collect();

        let entered = self
            .database
            .participations
            .entered_raffles(user_id, raffle_ids)
            .await?;
        for raffle_id in entered {
            flags.insert(raffle_id, true);
        }

        Ok(flags)
    }

    fn validate(input: NewParticipation) -> ActionOutcome<NewParticipation> {
        let mut errors = Vec::new();
        let mut field = |result: ActionOutcome<String>| match result {
            Ok(value) => value,
            Err(ActionError::Validation(mut messages)) => {
                errors.append(&mut messages);
                String::new()
            }
            Err(other) => {
                errors.push(other.to_string());
                String::new()
            }
        };

        let validated = NewParticipation {
            raffle_id: field(require_text("raffle_id", &input.raffle_id)),
            user_id: field(require_text("user_id", &input.user_id)),
            wallet_address: normalize_wallet(&field(require_text(
                "wallet_address",
                &input.wallet_address,
            ))),
            transaction_hash: field(require_text("transaction_hash", &input.transaction_hash)),
            amount_paid: field(require_amount("amount_paid", &input.amount_paid)),
            token_used: field(require_text("token_used", &input.token_used)),
        };

        if errors.is_empty() {
            Ok(validated)
        } else {
            Err(ActionError::Validation(errors))
        }
    }
}
