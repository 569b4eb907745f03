//! Platform users

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A platform user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Wallet address, unique when present
    pub wallet_address: Option<String>,
    /// Email, unique when present
    pub email: Option<String>,
    pub username: Option<String>,
    /// Derived from the participation table, see [`UserStats`]
    pub total_participations: i64,
    /// Derived from the participation table, see [`UserStats`]
    pub total_points: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn stats(&self) -> UserStats {
        UserStats {
            total_participations: self.total_participations,
            total_points: self.total_points,
        }
    }
}

/// Aggregate counters for a user
///
/// Always recomputed from participation rows, never incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_participations: i64,
    pub total_points: i64,
}

/// Input for manual registration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewUser {
    pub wallet_address: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
}

/// Stored counters plus the participations they were derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStatsReport {
    pub user_id: String,
    pub stats: UserStats,
    pub participations: Vec<super::Participation>,
}
