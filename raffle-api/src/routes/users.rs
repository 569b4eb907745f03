//! User endpoints

use axum::extract::{Path, State};
use raffle_core::{ActionError, ActionResult, NewUser, User, UserStatsReport};

use crate::dto::RegisterUserRequest;
use crate::error::{require, ApiResult, Envelope};
use crate::extract::{CurrentIdentity, ValidatedJson};
use crate::state::AppState;

/// Sign in with a wallet session; creates the user on first login
pub async fn wallet_login(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> Envelope<User> {
    state.actions.login_with_wallet(&identity).await.into()
}

/// The session's user
pub async fn me(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> ApiResult<Envelope<User>> {
    let wallet = identity.wallet_address.unwrap_or_default();
    let user = require(state.actions.get_user_by_wallet(&wallet).await)?;

    Ok(Envelope(match user {
        Some(user) => ActionResult::ok(user),
        None => ActionResult::fail(ActionError::not_found("User", wallet)),
    }))
}

/// Register a user by email and/or wallet
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterUserRequest>,
) -> Envelope<User> {
    let input = NewUser {
        wallet_address: req.wallet_address,
        email: req.email,
        username: req.username,
    };
    state.actions.register_user(input).await.into()
}

/// Counters and participation history
pub async fn user_stats(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Envelope<UserStatsReport> {
    state.actions.get_user_stats(&user_id).await.into()
}
