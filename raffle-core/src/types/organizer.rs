//! Raffle organizers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public view of an organizer
///
/// Wallet, email and password hash are never part of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organizer {
    pub id: String,
    pub name: String,
    pub logo_url: Option<String>,
    /// Accumulated engaged value, decimal string
    pub total_chz_engaged: String,
    pub created_at: DateTime<Utc>,
}

/// Input for organizer creation (backoffice)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewOrganizer {
    pub name: String,
    pub wallet_address: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub logo_url: Option<String>,
}

/// Engaged value of one organizer within one season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizerSeasonStats {
    pub organizer_id: String,
    pub season_id: String,
    /// Decimal string
    pub total_chz_engaged: String,
    pub updated_at: DateTime<Utc>,
}
