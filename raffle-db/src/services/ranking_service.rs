//! Ranking Service Implementation

use raffle_core::ranking::{rank_entries, TOP_ORGANIZERS_LIMIT};
use raffle_core::{ActionOutcome, RankingCandidate, RankingEntry, RankingPolicy, Season, SeasonRanking};
use std::sync::Arc;

use crate::entities::RankingRow;
use crate::repos::RaffleDatabase;

/// Ranking Service
pub struct RankingService {
    database: Arc<RaffleDatabase>,
    policy: RankingPolicy,
}

impl RankingService {
    /// Create a new Ranking Service
    pub fn new(database: Arc<RaffleDatabase>, policy: RankingPolicy) -> Self {
        Self { database, policy }
    }

    pub fn policy(&self) -> RankingPolicy {
        self.policy
    }

    /// All organizers, highest engaged total first
    pub async fn get_overall_ranking(&self) -> ActionOutcome<Vec<RankingEntry>> {
        let rows = self.database.organizers.ranking().await?;
        Ok(self.rank(rows))
    }

    /// The overall podium
    pub async fn get_top_organizers(&self) -> ActionOutcome<Vec<RankingEntry>> {
        let rows = self.database.organizers.ranking().await?;
        let mut entries = self.rank(rows);
        entries.truncate(TOP_ORGANIZERS_LIMIT);
        Ok(entries)
    }

    /// Leaderboard for one season; `None` when the season does not exist
    pub async fn get_season_ranking(&self, season_id: &str) -> ActionOutcome<Option<SeasonRanking>> {
        let season = match self.database.seasons.get_by_id(season_id).await? {
            Some(row) => Season::from(row),
            None => {
                tracing::debug!(season_id, "Season not found");
                return Ok(None);
            }
        };

        let rows = self.database.organizers.season_ranking(season_id).await?;
        Ok(Some(SeasonRanking {
            season,
            entries: self.rank(rows),
        }))
    }

    /// The active season, if any
    pub async fn get_current_season(&self) -> ActionOutcome<Option<Season>> {
        Ok(self.database.seasons.current().await?.map(Season::from))
    }

    fn rank(&self, rows: Vec<RankingRow>) -> Vec<RankingEntry> {
        let candidates: Vec<RankingCandidate> = rows.into_iter().map(Into::into).collect();
        let count = candidates.len();

        let entries = rank_entries(candidates, self.policy, |candidate| {
            tracing::warn!(
                organizer_id = %candidate.organizer_id,
                total = %candidate.total_chz_engaged,
                "Unparsable engaged total, scoring 0 points"
            );
        });

        tracing::debug!(count, policy = %self.policy, "Ranking computed");
        entries
    }
}
