//! Public raffle endpoints

use axum::extract::{Path, Query, State};
use raffle_core::{ActionError, Raffle, RaffleStatus};

use crate::dto::RaffleListQuery;
use crate::error::{ApiError, ApiResult, Envelope};
use crate::state::AppState;

/// List raffles, optionally by `?status=ACTIVE`
pub async fn list_raffles(
    State(state): State<AppState>,
    Query(query): Query<RaffleListQuery>,
) -> ApiResult<Envelope<Vec<Raffle>>> {
    let status = query
        .status
        .as_deref()
        .map(|s| {
            RaffleStatus::parse(s)
                .ok_or_else(|| ActionError::invalid_field("status", format!("unknown status {}", s)))
        })
        .transpose()
        .map_err(ApiError::from)?;

    Ok(state.actions.list_raffles(status).await.into())
}

/// Get raffle by ID
pub async fn get_raffle(
    State(state): State<AppState>,
    Path(raffle_id): Path<String>,
) -> Envelope<Raffle> {
    state.actions.get_raffle(&raffle_id).await.into()
}

/// On-chain identifier, `null` until deployed
pub async fn get_contract_id(
    State(state): State<AppState>,
    Path(raffle_id): Path<String>,
) -> Envelope<Option<i64>> {
    state.actions.get_contract_raffle_id(&raffle_id).await.into()
}
