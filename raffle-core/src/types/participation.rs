//! Raffle participations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed base award per participation
pub const POINTS_PER_PARTICIPATION: i64 = 1;

/// A user's entry into a raffle, unique per (raffle, user)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participation {
    pub id: String,
    pub raffle_id: String,
    pub user_id: String,
    pub wallet_address: String,
    pub transaction_hash: String,
    /// Decimal string
    pub amount_paid: String,
    pub token_used: String,
    pub points_earned: i64,
    pub created_at: DateTime<Utc>,
}

/// Payment proof and identity for a new participation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewParticipation {
    pub raffle_id: String,
    pub user_id: String,
    pub wallet_address: String,
    pub transaction_hash: String,
    pub amount_paid: String,
    pub token_used: String,
}

/// Result of a recorded participation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipationReceipt {
    pub participation_id: String,
}
