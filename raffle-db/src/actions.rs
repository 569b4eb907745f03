//! Action boundary
//!
//! [`RaffleActions`] is what callers outside the storage layer talk to.
//! Each method runs one service operation and folds its outcome into an
//! [`ActionResult`], so no error escapes.

use raffle_core::{
    ActionResult, Identity, NewOrganizer, NewParticipation, NewRaffle, NewSeason, NewUser,
    Organizer, OrganizerSeasonStats, Participation, ParticipationReceipt, Raffle, RaffleStatus,
    RankingEntry, RankingPolicy, Season, SeasonRanking, User, UserStats, UserStatsReport,
};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::repos::RaffleDatabase;
use crate::services::{
    BackofficeService, ParticipationService, RaffleService, RankingService, UserService,
};

/// Envelope-returning facade over the raffle services
#[derive(Clone)]
pub struct RaffleActions {
    database: Arc<RaffleDatabase>,
    participations: Arc<ParticipationService>,
    rankings: Arc<RankingService>,
    users: Arc<UserService>,
    raffles: Arc<RaffleService>,
    backoffice: Arc<BackofficeService>,
}

impl RaffleActions {
    pub fn new(database: Arc<RaffleDatabase>, policy: RankingPolicy) -> Self {
        Self {
            participations: Arc::new(ParticipationService::new(database.clone())),
            rankings: Arc::new(RankingService::new(database.clone(), policy)),
            users: Arc::new(UserService::new(database.clone())),
            raffles: Arc::new(RaffleService::new(database.clone())),
            backoffice: Arc::new(BackofficeService::new(database.clone())),
            database,
        }
    }

    pub fn database(&self) -> &Arc<RaffleDatabase> {
        &self.database
    }

    pub fn ranking_policy(&self) -> RankingPolicy {
        self.rankings.policy()
    }

    // Participation

    pub async fn create_participation(
        &self,
        input: NewParticipation,
    ) -> ActionResult<ParticipationReceipt> {
        ActionResult::from_outcome(
            "create_participation",
            self.participations.create_participation(input).await,
        )
    }

    pub async fn recompute_user_stats(&self, user_id: &str) -> ActionResult<UserStats> {
        ActionResult::from_outcome(
            "recompute_user_stats",
            self.participations.recompute_user_stats(user_id).await,
        )
    }

    pub async fn has_user_participated(&self, raffle_id: &str, user_id: &str) -> ActionResult<bool> {
        ActionResult::from_outcome(
            "has_user_participated",
            self.participations.has_user_participated(raffle_id, user_id).await,
        )
    }

    pub async fn get_user_participations_for_raffles(
        &self,
        user_id: &str,
        raffle_ids: &[String],
    ) -> ActionResult<BTreeMap<String, bool>> {
        ActionResult::from_outcome(
            "get_user_participations_for_raffles",
            self.participations
                .get_user_participations_for_raffles(user_id, raffle_ids)
                .await,
        )
    }

    // Ranking

    pub async fn get_overall_ranking(&self) -> ActionResult<Vec<RankingEntry>> {
        ActionResult::from_outcome("get_overall_ranking", self.rankings.get_overall_ranking().await)
    }

    pub async fn get_season_ranking(&self, season_id: &str) -> ActionResult<Option<SeasonRanking>> {
        ActionResult::from_outcome(
            "get_season_ranking",
            self.rankings.get_season_ranking(season_id).await,
        )
    }

    pub async fn get_top_organizers(&self) -> ActionResult<Vec<RankingEntry>> {
        ActionResult::from_outcome("get_top_organizers", self.rankings.get_top_organizers().await)
    }

    pub async fn get_current_season(&self) -> ActionResult<Option<Season>> {
        ActionResult::from_outcome("get_current_season", self.rankings.get_current_season().await)
    }

    // Users

    pub async fn register_user(&self, input: NewUser) -> ActionResult<User> {
        ActionResult::from_outcome("register_user", self.users.register_user(input).await)
    }

    pub async fn login_with_wallet(&self, identity: &Identity) -> ActionResult<User> {
        ActionResult::from_outcome("login_with_wallet", self.users.login_with_wallet(identity).await)
    }

    pub async fn get_user(&self, user_id: &str) -> ActionResult<User> {
        ActionResult::from_outcome("get_user", self.users.get_user(user_id).await)
    }

    pub async fn get_user_by_wallet(&self, wallet_address: &str) -> ActionResult<Option<User>> {
        ActionResult::from_outcome(
            "get_user_by_wallet",
            self.users.get_user_by_wallet(wallet_address).await,
        )
    }

    pub async fn get_user_stats(&self, user_id: &str) -> ActionResult<UserStatsReport> {
        ActionResult::from_outcome("get_user_stats", self.users.get_user_stats(user_id).await)
    }

    pub async fn list_user_participations(&self, user_id: &str) -> ActionResult<Vec<Participation>> {
        ActionResult::from_outcome(
            "list_user_participations",
            self.users.list_user_participations(user_id).await,
        )
    }

    // Raffles

    pub async fn create_raffle(&self, input: NewRaffle) -> ActionResult<Raffle> {
        ActionResult::from_outcome("create_raffle", self.raffles.create_raffle(input).await)
    }

    pub async fn get_raffle(&self, raffle_id: &str) -> ActionResult<Raffle> {
        ActionResult::from_outcome("get_raffle", self.raffles.get_raffle(raffle_id).await)
    }

    pub async fn list_raffles(&self, status: Option<RaffleStatus>) -> ActionResult<Vec<Raffle>> {
        ActionResult::from_outcome("list_raffles", self.raffles.list_raffles(status).await)
    }

    pub async fn update_raffle_status(
        &self,
        raffle_id: &str,
        status: RaffleStatus,
    ) -> ActionResult<Raffle> {
        ActionResult::from_outcome(
            "update_raffle_status",
            self.raffles.update_raffle_status(raffle_id, status).await,
        )
    }

    pub async fn get_contract_raffle_id(&self, raffle_id: &str) -> ActionResult<Option<i64>> {
        ActionResult::from_outcome(
            "get_contract_raffle_id",
            self.raffles.get_contract_raffle_id(raffle_id).await,
        )
    }

    pub async fn attach_contract_id(
        &self,
        raffle_id: &str,
        contract_raffle_id: i64,
    ) -> ActionResult<Raffle> {
        ActionResult::from_outcome(
            "attach_contract_id",
            self.raffles.attach_contract_id(raffle_id, contract_raffle_id).await,
        )
    }

    // Backoffice

    pub async fn create_organizer(&self, input: NewOrganizer) -> ActionResult<Organizer> {
        ActionResult::from_outcome("create_organizer", self.backoffice.create_organizer(input).await)
    }

    pub async fn set_organizer_engaged(&self, organizer_id: &str, total: &str) -> ActionResult<Organizer> {
        ActionResult::from_outcome(
            "set_organizer_engaged",
            self.backoffice.set_organizer_engaged(organizer_id, total).await,
        )
    }

    pub async fn set_season_engaged(
        &self,
        organizer_id: &str,
        season_id: &str,
        total: &str,
    ) -> ActionResult<OrganizerSeasonStats> {
        ActionResult::from_outcome(
            "set_season_engaged",
            self.backoffice
                .set_season_engaged(organizer_id, season_id, total)
                .await,
        )
    }

    pub async fn create_season(&self, input: NewSeason) -> ActionResult<Season> {
        ActionResult::from_outcome("create_season", self.backoffice.create_season(input).await)
    }

    pub async fn activate_season(&self, season_id: &str) -> ActionResult<Season> {
        ActionResult::from_outcome("activate_season", self.backoffice.activate_season(season_id).await)
    }

    pub async fn list_seasons(&self) -> ActionResult<Vec<Season>> {
        ActionResult::from_outcome("list_seasons", self.backoffice.list_seasons().await)
    }
}
