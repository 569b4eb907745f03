//! Health check endpoint

use axum::extract::State;
use raffle_core::ActionResult;

use crate::dto::HealthResponse;
use crate::error::Envelope;
use crate::state::AppState;

/// Health check endpoint (verifies database connectivity)
pub async fn health_check(State(state): State<AppState>) -> Envelope<HealthResponse> {
    let database = match state.actions.database().health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            false
        }
    };

    let status = if database { "healthy" } else { "degraded" };

    Envelope(ActionResult::ok(HealthResponse {
        status: status.to_string(),
        version: state.version.clone(),
        database,
        ranking_policy: state.actions.ranking_policy().to_string(),
    }))
}
