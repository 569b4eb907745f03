//! Participation rows

use chrono::{DateTime, Utc};
use raffle_core::{NewParticipation, Participation};

use super::{new_id, Entity};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ParticipationRow {
    pub id: String,
    pub raffle_id: String,
    pub user_id: String,
    pub wallet_address: String,
    pub transaction_hash: String,
    pub amount_paid: String,
    pub token_used: String,
    pub points_earned: i64,
    pub created_at: DateTime<Utc>,
}

impl Entity for ParticipationRow {
    const TABLE: &'static str = "participations";
}

impl ParticipationRow {
    pub fn new(input: NewParticipation, points_earned: i64) -> Self {
        Self {
            id: new_id(),
            raffle_id: input.raffle_id,
            user_id: input.user_id,
            wallet_address: input.wallet_address,
            transaction_hash: input.transaction_hash,
            amount_paid: input.amount_paid,
            token_used: input.token_used,
            points_earned,
            created_at: Utc::now(),
        }
    }
}

impl From<ParticipationRow> for Participation {
    fn from(row: ParticipationRow) -> Self {
        Participation {
            id: row.id,
            raffle_id: row.raffle_id,
            user_id: row.user_id,
            wallet_address: row.wallet_address,
            transaction_hash: row.transaction_hash,
            amount_paid: row.amount_paid,
            token_used: row.token_used,
            points_earned: row.points_earned,
            created_at: row.created_at,
        }
    }
}
