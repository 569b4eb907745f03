//! Raffle rows

use chrono::{DateTime, Utc};
use raffle_core::{NewRaffle, Raffle, RaffleStatus};

use super::{new_id, Entity};
use crate::error::DbError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RaffleRow {
    pub id: String,
    pub organizer_id: String,
    pub season_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    /// DRAFT, ACTIVE, ENDED or CANCELLED
    pub status: String,
    pub contract_raffle_id: Option<i64>,
    pub ticket_price: String,
    pub token_symbol: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for RaffleRow {
    const TABLE: &'static str = "raffles";
}

impl RaffleRow {
    pub fn new(input: NewRaffle) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            organizer_id: input.organizer_id,
            season_id: input.season_id,
            title: input.title,
            description: input.description,
            status: input.status.as_str().to_string(),
            contract_raffle_id: None,
            ticket_price: input.ticket_price,
            token_symbol: input.token_symbol,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn status(&self) -> Result<RaffleStatus, DbError> {
        RaffleStatus::parse(&self.status).ok_or_else(|| {
            DbError::InvalidData(format!("raffle {} has unknown status {}", self.id, self.status))
        })
    }
}

impl TryFrom<RaffleRow> for Raffle {
    type Error = DbError;

    fn try_from(row: RaffleRow) -> Result<Self, Self::Error> {
        let status = row.status()?;
        Ok(Raffle {
            id: row.id,
            organizer_id: row.organizer_id,
            season_id: row.season_id,
            title: row.title,
            description: row.description,
            status,
            contract_raffle_id: row.contract_raffle_id,
            ticket_price: row.ticket_price,
            token_symbol: row.token_symbol,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
