//! API route handlers

pub mod admin;
pub mod health;
pub mod participations;
pub mod raffles;
pub mod ranking;
pub mod users;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Rankings
        .route("/api/v1/ranking", get(ranking::overall_ranking))
        .route("/api/v1/ranking/top", get(ranking::top_organizers))
        .route("/api/v1/seasons/current", get(ranking::current_season))
        .route("/api/v1/seasons/:season_id/ranking", get(ranking::season_ranking))
        // Raffles
        .route("/api/v1/raffles", get(raffles::list_raffles))
        .route("/api/v1/raffles/:raffle_id", get(raffles::get_raffle))
        .route("/api/v1/raffles/:raffle_id/contract", get(raffles::get_contract_id))
        // Participations
        .route("/api/v1/participations", post(participations::create_participation))
        .route("/api/v1/participations/check", get(participations::check_participation))
        .route("/api/v1/participations/lookup", post(participations::lookup_participations))
        // Users
        .route("/api/v1/auth/wallet", post(users::wallet_login))
        .route("/api/v1/me", get(users::me))
        .route("/api/v1/users", post(users::register_user))
        .route("/api/v1/users/:user_id/stats", get(users::user_stats))
        // Backoffice
        .route("/admin/organizers", post(admin::create_organizer))
        .route("/admin/organizers/:organizer_id/engaged", put(admin::set_organizer_engaged))
        .route("/admin/seasons", get(admin::list_seasons).post(admin::create_season))
        .route("/admin/seasons/:season_id/activate", post(admin::activate_season))
        .route(
            "/admin/seasons/:season_id/organizers/:organizer_id/engaged",
            put(admin::set_season_engaged),
        )
        .route("/admin/raffles", post(admin::create_raffle))
        .route("/admin/raffles/:raffle_id/status", post(admin::update_raffle_status))
        .route("/admin/raffles/:raffle_id/contract", post(admin::attach_contract))
        .with_state(state)
}
