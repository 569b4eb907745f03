//! Raffle Service Implementation

use raffle_core::{ActionError, ActionOutcome, NewRaffle, Raffle, RaffleStatus};
use std::sync::Arc;

use super::{require_amount, require_text};
use crate::entities::RaffleRow;
use crate::repos::RaffleDatabase;

/// Raffle Service
pub struct RaffleService {
    database: Arc<RaffleDatabase>,
}

impl RaffleService {
    /// Create a new Raffle Service
    pub fn new(database: Arc<RaffleDatabase>) -> Self {
        Self { database }
    }

    /// Create a raffle for an existing organizer
    ///
    /// Raffles start as `DRAFT` or `ACTIVE`.
    pub async fn create_raffle(&self, input: NewRaffle) -> ActionOutcome<Raffle> {
        if !matches!(input.status, RaffleStatus::Draft | RaffleStatus::Active) {
            return Err(ActionError::invalid_field(
                "status",
                "a new raffle must be DRAFT or ACTIVE",
            ));
        }
        let title = require_text("title", &input.title)?;
        let ticket_price = require_amount("ticket_price", &input.ticket_price)?;
        let token_symbol = require_text("token_symbol", &input.token_symbol)?.to_uppercase();

        if self.database.organizers.get_by_id(&input.organizer_id).await?.is_none() {
            return Err(ActionError::not_found("Organizer", &input.organizer_id));
        }
        if let Some(season_id) = &input.season_id {
            if self.database.seasons.get_by_id(season_id).await?.is_none() {
                return Err(ActionError::not_found("Season", season_id));
            }
        }

        let row = RaffleRow::new(NewRaffle {
            title,
            ticket_price,
            token_symbol,
            ..input
        });
        let row = self.database.raffles.create(&row).await?;

        tracing::info!(raffle_id = %row.id, organizer_id = %row.organizer_id, status = %row.status, "Raffle created");
        Ok(Raffle::try_from(row)?)
    }

    pub async fn get_raffle(&self, raffle_id: &str) -> ActionOutcome<Raffle> {
        let row = self
            .database
            .raffles
            .get_by_id(raffle_id)
            .await?
            .ok_or_else(|| ActionError::not_found("Raffle", raffle_id))?;
        Ok(Raffle::try_from(row)?)
    }

    /// Raffles, optionally filtered by status
    pub async fn list_raffles(&self, status: Option<RaffleStatus>) -> ActionOutcome<Vec<Raffle>> {
        let rows = self.database.raffles.list(status).await?;
        let raffles = rows
            .into_iter()
            .map(Raffle::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(raffles)
    }

    /// Move a raffle along its lifecycle
    pub async fn update_raffle_status(
        &self,
        raffle_id: &str,
        status: RaffleStatus,
    ) -> ActionOutcome<Raffle> {
        let raffle = self.get_raffle(raffle_id).await?;

        if raffle.status == status {
            return Ok(raffle);
        }
        if !raffle.status.can_transition_to(status) {
            let message = if raffle.status.is_terminal() {
                format!("Raffle is already {}", raffle.status)
            } else {
                format!("Cannot move raffle from {} to {}", raffle.status, status)
            };
            return Err(ActionError::invalid_state(message));
        }

        self.database.raffles.update_status(raffle_id, status).await?;
        tracing::info!(raffle_id, from = %raffle.status, to = %status, "Raffle status updated");

        self.get_raffle(raffle_id).await
    }

    /// The on-chain identifier; `None` until the raffle is deployed
    pub async fn get_contract_raffle_id(&self, raffle_id: &str) -> ActionOutcome<Option<i64>> {
        self.database
            .raffles
            .contract_raffle_id(raffle_id)
            .await?
            .ok_or_else(|| ActionError::not_found("Raffle", raffle_id))
    }

    /// Record the identifier returned by the contract deployment
    pub async fn attach_contract_id(
        &self,
        raffle_id: &str,
        contract_raffle_id: i64,
    ) -> ActionOutcome<Raffle> {
        if contract_raffle_id < 0 {
            return Err(ActionError::invalid_field("contract_raffle_id", "must not be negative"));
        }

        match self.get_contract_raffle_id(raffle_id).await? {
            Some(existing) if existing == contract_raffle_id => return self.get_raffle(raffle_id).await,
            Some(existing) => {
                return Err(ActionError::conflict(format!(
                    "Raffle is already linked to contract raffle {}",
                    existing
                )))
            }
            None => {}
        }

        self.database
            .raffles
            .set_contract_raffle_id(raffle_id, contract_raffle_id)
            .await?;
        tracing::info!(raffle_id, contract_raffle_id, "Contract raffle attached");

        self.get_raffle(raffle_id).await
    }
}
