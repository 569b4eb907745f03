//! Backoffice Service Implementation
//!
//! Organizer and season management, plus the ingestion entry points that
//! feed engaged totals into the rankings.

use raffle_core::{
    ActionError, ActionOutcome, NewOrganizer, NewSeason, Organizer, OrganizerSeasonStats, Season,
};
use std::sync::Arc;

use super::{normalize_wallet, require_amount, require_text};
use crate::entities::{OrganizerRow, SeasonRow};
use crate::error::DbError;
use crate::repos::RaffleDatabase;

/// Backoffice Service
pub struct BackofficeService {
    database: Arc<RaffleDatabase>,
}

impl BackofficeService {
    /// Create a new Backoffice Service
    pub fn new(database: Arc<RaffleDatabase>) -> Self {
        Self { database }
    }

    pub async fn create_organizer(&self, input: NewOrganizer) -> ActionOutcome<Organizer> {
        let name = require_text("name", &input.name)?;
        let row = OrganizerRow::new(NewOrganizer {
            name,
            wallet_address: input.wallet_address.map(|w| normalize_wallet(&w)),
            email: input.email.map(|e| e.trim().to_lowercase()),
            ..input
        });

        let row = self.database.organizers.create(&row).await.map_err(|e| match e {
            DbError::AlreadyExists(_) => {
                ActionError::conflict("An organizer with this wallet or email already exists")
            }
            other => other.into(),
        })?;

        tracing::info!(organizer_id = %row.id, "Organizer created");
        Ok(row.into())
    }

    pub async fn get_organizer(&self, organizer_id: &str) -> ActionOutcome<Organizer> {
        self.database
            .organizers
            .get_by_id(organizer_id)
            .await?
            .map(Organizer::from)
            .ok_or_else(|| ActionError::not_found("Organizer", organizer_id))
    }

    /// Overwrite an organizer's all-time engaged total
    pub async fn set_organizer_engaged(&self, organizer_id: &str, total: &str) -> ActionOutcome<Organizer> {
        let total = require_amount("total_chz_engaged", total)?;

        self.database
            .organizers
            .set_total_engaged(organizer_id, &total)
            .await
            .map_err(|e| match e {
                DbError::NotFound(_) => ActionError::not_found("Organizer", organizer_id),
                other => other.into(),
            })?;

        tracing::info!(organizer_id, total = %total, "Organizer engaged total updated");
        self.get_organizer(organizer_id).await
    }

    /// Insert or overwrite an organizer's engaged total for one season
    pub async fn set_season_engaged(
        &self,
        organizer_id: &str,
        season_id: &str,
        total: &str,
    ) -> ActionOutcome<OrganizerSeasonStats> {
        let total = require_amount("total_chz_engaged", total)?;

        if self.database.organizers.get_by_id(organizer_id).await?.is_none() {
            return Err(ActionError::not_found("Organizer", organizer_id));
        }
        if self.database.seasons.get_by_id(season_id).await?.is_none() {
            return Err(ActionError::not_found("Season", season_id));
        }

        let row = self
            .database
            .organizers
            .upsert_season_stats(organizer_id, season_id, &total)
            .await?;

        tracing::info!(organizer_id, season_id, total = %total, "Season engaged total updated");
        Ok(row.into())
    }

    /// Create an inactive season
    pub async fn create_season(&self, input: NewSeason) -> ActionOutcome<Season> {
        let name = require_text("name", &input.name)?;
        if input.end_date <= input.start_date {
            return Err(ActionError::invalid_field("end_date", "must be after start_date"));
        }

        let row = self
            .database
            .seasons
            .create(&SeasonRow::new(NewSeason { name, ..input }))
            .await?;

        tracing::info!(season_id = %row.id, "Season created");
        Ok(row.into())
    }

    /// Make a season the only active one
    pub async fn activate_season(&self, season_id: &str) -> ActionOutcome<Season> {
        self.database
            .seasons
            .activate(season_id)
            .await
            .map_err(|e| match e {
                DbError::NotFound(_) => ActionError::not_found("Season", season_id),
                other => other.into(),
            })?;

        tracing::info!(season_id, "Season activated");
        self.database
            .seasons
            .get_by_id(season_id)
            .await?
            .map(Season::from)
            .ok_or_else(|| ActionError::not_found("Season", season_id))
    }

    pub async fn list_seasons(&self) -> ActionOutcome<Vec<Season>> {
        let rows = self.database.seasons.list().await?;
        Ok(rows.into_iter().map(Season::from).collect())
    }
}
