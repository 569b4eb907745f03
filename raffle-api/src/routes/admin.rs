//! Backoffice endpoints
//!
//! Every handler requires the `X-Admin-Key` header.

use axum::extract::{Path, State};
use raffle_core::{
    NewOrganizer, NewRaffle, NewSeason, Organizer, OrganizerSeasonStats, Raffle, RaffleStatus,
    Season,
};

use crate::dto::{
    AttachContractRequest, CreateOrganizerRequest, CreateRaffleRequest, CreateSeasonRequest,
    EngagedTotalRequest, UpdateRaffleStatusRequest,
};
use crate::error::Envelope;
use crate::extract::{AdminKey, ValidatedJson};
use crate::state::AppState;

pub async fn create_organizer(
    _admin: AdminKey,
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateOrganizerRequest>,
) -> Envelope<Organizer> {
    let input = NewOrganizer {
        name: req.name,
        wallet_address: req.wallet_address,
        email: req.email,
        password_hash: req.password_hash,
        logo_url: req.logo_url,
    };
    state.actions.create_organizer(input).await.into()
}

/// Overwrite an organizer's all-time engaged total
pub async fn set_organizer_engaged(
    _admin: AdminKey,
    State(state): State<AppState>,
    Path(organizer_id): Path<String>,
    ValidatedJson(req): ValidatedJson<EngagedTotalRequest>,
) -> Envelope<Organizer> {
    state
        .actions
        .set_organizer_engaged(&organizer_id, &req.total_chz_engaged)
        .await
        .into()
}

/// Overwrite an organizer's engaged total for one season
pub async fn set_season_engaged(
    _admin: AdminKey,
    State(state): State<AppState>,
    Path((season_id, organizer_id)): Path<(String, String)>,
    ValidatedJson(req): ValidatedJson<EngagedTotalRequest>,
) -> Envelope<OrganizerSeasonStats> {
    state
        .actions
        .set_season_engaged(&organizer_id, &season_id, &req.total_chz_engaged)
        .await
        .into()
}

pub async fn list_seasons(_admin: AdminKey, State(state): State<AppState>) -> Envelope<Vec<Season>> {
    state.actions.list_seasons().await.into()
}

pub async fn create_season(
    _admin: AdminKey,
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateSeasonRequest>,
) -> Envelope<Season> {
    let input = NewSeason {
        name: req.name,
        start_date: req.start_date,
        end_date: req.end_date,
    };
    state.actions.create_season(input).await.into()
}

/// Make a season the only active one
pub async fn activate_season(
    _admin: AdminKey,
    State(state): State<AppState>,
    Path(season_id): Path<String>,
) -> Envelope<Season> {
    state.actions.activate_season(&season_id).await.into()
}

pub async fn create_raffle(
    _admin: AdminKey,
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateRaffleRequest>,
) -> Envelope<Raffle> {
    let input = NewRaffle {
        organizer_id: req.organizer_id,
        season_id: req.season_id,
        title: req.title,
        description: req.description,
        status: req.status.unwrap_or(RaffleStatus::Draft),
        ticket_price: req.ticket_price,
        token_symbol: req.token_symbol,
    };
    state.actions.create_raffle(input).await.into()
}

pub async fn update_raffle_status(
    _admin: AdminKey,
    State(state): State<AppState>,
    Path(raffle_id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateRaffleStatusRequest>,
) -> Envelope<Raffle> {
    state
        .actions
        .update_raffle_status(&raffle_id, req.status)
        .await
        .into()
}

/// Link the raffle to its deployed contract raffle
pub async fn attach_contract(
    _admin: AdminKey,
    State(state): State<AppState>,
    Path(raffle_id): Path<String>,
    ValidatedJson(req): ValidatedJson<AttachContractRequest>,
) -> Envelope<Raffle> {
    state
        .actions
        .attach_contract_id(&raffle_id, req.contract_raffle_id)
        .await
        .into()
}
