//! Leaderboard endpoints

use axum::extract::{Path, State};
use raffle_core::{RankingEntry, Season, SeasonRanking};

use crate::error::Envelope;
use crate::state::AppState;

/// All organizers by engaged total
pub async fn overall_ranking(State(state): State<AppState>) -> Envelope<Vec<RankingEntry>> {
    state.actions.get_overall_ranking().await.into()
}

/// The podium
pub async fn top_organizers(State(state): State<AppState>) -> Envelope<Vec<RankingEntry>> {
    state.actions.get_top_organizers().await.into()
}

/// The active season, or `null`
pub async fn current_season(State(state): State<AppState>) -> Envelope<Option<Season>> {
    state.actions.get_current_season().await.into()
}

/// Leaderboard for one season; `null` for an unknown season
pub async fn season_ranking(
    State(state): State<AppState>,
    Path(season_id): Path<String>,
) -> Envelope<Option<SeasonRanking>> {
    state.actions.get_season_ranking(&season_id).await.into()
}
