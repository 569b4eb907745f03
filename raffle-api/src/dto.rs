//! Data Transfer Objects for API requests and responses

use chrono::{DateTime, Utc};
use raffle_core::RaffleStatus;
use serde::{Deserialize, Serialize};
use validator::Validate;

// ============ Health ============

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: bool,
    pub ranking_policy: String,
}

// ============ Participations ============

/// Enter a raffle; wallet and user come from the session
#[derive(Debug, Deserialize, Validate)]
pub struct CreateParticipationRequest {
    #[validate(length(min = 1, max = 64))]
    pub raffle_id: String,
    /// On-chain payment transaction
    #[validate(length(min = 1, max = 256))]
    pub transaction_hash: String,
    /// Decimal string
    #[validate(length(min = 1, max = 78))]
    pub amount_paid: String,
    #[validate(length(min = 1, max = 16))]
    pub token_used: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ParticipationCheckQuery {
    #[validate(length(min = 1, max = 64))]
    pub raffle_id: String,
}

/// Batch participation check for a listing page
#[derive(Debug, Deserialize, Validate)]
pub struct ParticipationLookupRequest {
    #[validate(length(max = 500))]
    pub raffle_ids: Vec<String>,
}

// ============ Users ============

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub wallet_address: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub username: Option<String>,
}

// ============ Raffles ============

#[derive(Debug, Default, Deserialize)]
pub struct RaffleListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRaffleRequest {
    #[validate(length(min = 1, max = 64))]
    pub organizer_id: String,
    pub season_id: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 4000))]
    pub description: Option<String>,
    /// Defaults to `DRAFT`
    pub status: Option<RaffleStatus>,
    #[validate(length(min = 1, max = 78))]
    pub ticket_price: String,
    #[validate(length(min = 1, max = 16))]
    pub token_symbol: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRaffleStatusRequest {
    pub status: RaffleStatus,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AttachContractRequest {
    #[validate(range(min = 0))]
    pub contract_raffle_id: i64,
}

// ============ Backoffice ============

#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrganizerRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[validate(length(min = 1, max = 128))]
    pub wallet_address: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub password_hash: Option<String>,
    #[validate(url)]
    pub logo_url: Option<String>,
}

/// Engaged total pushed by the ingestion job
#[derive(Debug, Deserialize, Validate)]
pub struct EngagedTotalRequest {
    #[validate(length(min = 1, max = 78))]
    pub total_chz_engaged: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSeasonRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}
