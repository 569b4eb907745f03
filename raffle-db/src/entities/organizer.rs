//! Organizer rows

use chrono::{DateTime, Utc};
use raffle_core::{NewOrganizer, Organizer, OrganizerSeasonStats, RankingCandidate};

use super::{new_id, Entity};

/// Full organizer row, sensitive columns included
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrganizerRow {
    pub id: String,
    pub name: String,
    pub wallet_address: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub logo_url: Option<String>,
    pub total_chz_engaged: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for OrganizerRow {
    const TABLE: &'static str = "organizers";
}

impl OrganizerRow {
    pub fn new(input: NewOrganizer) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            name: input.name,
            wallet_address: input.wallet_address,
            email: input.email,
            password_hash: input.password_hash,
            logo_url: input.logo_url,
            total_chz_engaged: "0".to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<OrganizerRow> for Organizer {
    fn from(row: OrganizerRow) -> Self {
        Organizer {
            id: row.id,
            name: row.name,
            logo_url: row.logo_url,
            total_chz_engaged: row.total_chz_engaged,
            created_at: row.created_at,
        }
    }
}

/// Ranking projection: public columns and the engaged total only
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RankingRow {
    pub organizer_id: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub total_chz_engaged: String,
}

impl From<RankingRow> for RankingCandidate {
    fn from(row: RankingRow) -> Self {
        RankingCandidate {
            organizer_id: row.organizer_id,
            name: row.name,
            logo_url: row.logo_url,
            total_chz_engaged: row.total_chz_engaged,
        }
    }
}

/// Per-season accumulation for one organizer
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrganizerSeasonStatsRow {
    pub organizer_id: String,
    pub season_id: String,
    pub total_chz_engaged: String,
    pub updated_at: DateTime<Utc>,
}

impl Entity for OrganizerSeasonStatsRow {
    const TABLE: &'static str = "organizer_season_stats";
}

impl From<OrganizerSeasonStatsRow> for OrganizerSeasonStats {
    fn from(row: OrganizerSeasonStatsRow) -> Self {
        OrganizerSeasonStats {
            organizer_id: row.organizer_id,
            season_id: row.season_id,
            total_chz_engaged: row.total_chz_engaged,
            updated_at: row.updated_at,
        }
    }
}
