//! Participation endpoints
//!
//! All routes act on behalf of the session's wallet. Recording a
//! participation creates the user record on first use; the read routes
//! treat an unknown wallet as a user with no entries.

use axum::extract::State;
use raffle_core::{ActionResult, Identity, NewParticipation, ParticipationReceipt, User};
use std::collections::BTreeMap;

use crate::dto::{CreateParticipationRequest, ParticipationCheckQuery, ParticipationLookupRequest};
use crate::error::{require, ApiError, ApiResult, Envelope};
use crate::extract::{CurrentIdentity, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

async fn session_user(state: &AppState, identity: &Identity) -> ApiResult<User> {
    require(state.actions.login_with_wallet(identity).await)
}

/// Existing user behind a verified session, without creating one
async fn known_session_user(state: &AppState, identity: &Identity) -> ApiResult<Option<User>> {
    if !identity.verified {
        return Err(ApiError::Unauthorized("Wallet ownership is not verified".to_string()));
    }
    let wallet = identity
        .wallet_address
        .as_deref()
        .filter(|w| !w.trim().is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Session has no wallet address".to_string()))?;

    require(state.actions.get_user_by_wallet(wallet).await)
}

/// Record a participation
pub async fn create_participation(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    ValidatedJson(req): ValidatedJson<CreateParticipationRequest>,
) -> ApiResult<Envelope<ParticipationReceipt>> {
    let user = session_user(&state, &identity).await?;
    let wallet_address = user
        .wallet_address
        .clone()
        .ok_or_else(|| ApiError::Unauthorized("Session has no wallet address".to_string()))?;

    let input = NewParticipation {
        raffle_id: req.raffle_id,
        user_id: user.id,
        wallet_address,
        transaction_hash: req.transaction_hash,
        amount_paid: req.amount_paid,
        token_used: req.token_used,
    };

    Ok(state.actions.create_participation(input).await.into())
}

/// Whether the session user entered a raffle
pub async fn check_participation(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    ValidatedQuery(query): ValidatedQuery<ParticipationCheckQuery>,
) -> ApiResult<Envelope<bool>> {
    match known_session_user(&state, &identity).await? {
        Some(user) => Ok(state
            .actions
            .has_user_participated(&query.raffle_id, &user.id)
            .await
            .into()),
        None => Ok(Envelope(ActionResult::ok(false))),
    }
}

/// Participation flags for a batch of raffles
pub async fn lookup_participations(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    ValidatedJson(req): ValidatedJson<ParticipationLookupRequest>,
) -> ApiResult<Envelope<BTreeMap<String, bool>>> {
    match known_session_user(&state, &identity).await? {
        Some(user) => Ok(state
            .actions
            .get_user_participations_for_raffles(&user.id, &req.raffle_ids)
            .await
            .into()),
        None => {
            let flags = req.raffle_ids.into_iter().map(|id| (id, false)).collect();
            Ok(Envelope(ActionResult::ok(flags)))
        }
    }
}
