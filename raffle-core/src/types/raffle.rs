//! Raffles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raffle lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RaffleStatus {
    Draft,
    Active,
    Ended,
    Cancelled,
}

impl RaffleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Active => "ACTIVE",
            Self::Ended => "ENDED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parse the stored representation (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "DRAFT" => Some(Self::Draft),
            "ACTIVE" => Some(Self::Active),
            "ENDED" => Some(Self::Ended),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Only active raffles accept participations
    pub fn accepts_participations(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Ended and cancelled raffles never change status again
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }

    /// Allowed lifecycle moves; staying in the same status is a no-op
    pub fn can_transition_to(&self, next: RaffleStatus) -> bool {
        if *self == next {
            return true;
        }
        match self {
            Self::Draft => matches!(next, Self::Active | Self::Cancelled),
            Self::Active => matches!(next, Self::Ended | Self::Cancelled),
            Self::Ended | Self::Cancelled => false,
        }
    }
}

impl std::fmt::Display for RaffleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raffle run by an organizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Raffle {
    pub id: String,
    pub organizer_id: String,
    pub season_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub status: RaffleStatus,
    /// Identifier of the on-chain raffle, once deployed
    pub contract_raffle_id: Option<i64>,
    /// Decimal string
    pub ticket_price: String,
    pub token_symbol: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for raffle creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRaffle {
    pub organizer_id: String,
    pub season_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub status: RaffleStatus,
    pub ticket_price: String,
    pub token_symbol: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(RaffleStatus::parse("ACTIVE"), Some(RaffleStatus::Active));
        assert_eq!(RaffleStatus::parse("ended"), Some(RaffleStatus::Ended));
        assert_eq!(RaffleStatus::parse("paused"), None);
    }

    #[test]
    fn test_only_active_accepts_participations() {
        assert!(RaffleStatus::Active.accepts_participations());
        assert!(!RaffleStatus::Draft.accepts_participations());
        assert!(!RaffleStatus::Ended.accepts_participations());
        assert!(!RaffleStatus::Cancelled.accepts_participations());
    }

    #[test]
    fn test_transitions() {
        assert!(RaffleStatus::Draft.can_transition_to(RaffleStatus::Active));
        assert!(RaffleStatus::Active.can_transition_to(RaffleStatus::Ended));
        assert!(RaffleStatus::Active.can_transition_to(RaffleStatus::Active));
        assert!(!RaffleStatus::Active.can_transition_to(RaffleStatus::Draft));
        assert!(!RaffleStatus::Ended.can_transition_to(RaffleStatus::Active));
        assert!(!RaffleStatus::Cancelled.can_transition_to(RaffleStatus::Draft));
        assert!(RaffleStatus::Cancelled.is_terminal());
    }
}
