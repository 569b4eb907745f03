//! Ranking seasons

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time-boxed ranking period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub id: String,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
}

/// Input for season creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSeason {
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}
