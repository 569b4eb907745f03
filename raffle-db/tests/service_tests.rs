//! Service tests for the raffle actions
//!
//! Tests run against their own in-memory SQLite database, except the
//! concurrency test, which needs a multi-connection file database.

use chrono::{Duration, Utc};
use raffle_core::{
    ActionResult, ErrorKind, Identity, NewOrganizer, NewParticipation, NewRaffle, NewSeason,
    NewUser, RaffleStatus, RankingPolicy, UserStats,
};
use raffle_db::{RaffleActions, RaffleDatabase};
use std::sync::Arc;

async fn create_actions_with(policy: RankingPolicy) -> RaffleActions {
    let db = RaffleDatabase::in_memory().await.unwrap();
    RaffleActions::new(Arc::new(db), policy)
}

async fn create_actions() -> RaffleActions {
    create_actions_with(RankingPolicy::default()).await
}

async fn create_organizer(actions: &RaffleActions, name: &str, engaged: &str) -> String {
    let organizer = actions
        .create_organizer(NewOrganizer {
            name: name.to_string(),
            ..Default::default()
        })
        .await
        .into_data()
        .unwrap();
    actions
        .set_organizer_engaged(&organizer.id, engaged)
        .await
        .into_data()
        .unwrap();
    organizer.id
}

async fn create_raffle(actions: &RaffleActions, status: RaffleStatus) -> String {
    let organizer_id = create_organizer(actions, "Club", "0").await;
    actions
        .create_raffle(NewRaffle {
            organizer_id,
            season_id: None,
            title: "Match tickets".to_string(),
            description: None,
            status,
            ticket_price: "2.5".to_string(),
            token_symbol: "chz".to_string(),
        })
        .await
        .into_data()
        .unwrap()
        .id
}

async fn create_user(actions: &RaffleActions, wallet: &str) -> String {
    actions
        .register_user(NewUser {
            wallet_address: Some(wallet.to_string()),
            ..Default::default()
        })
        .await
        .into_data()
        .unwrap()
        .id
}

fn participation(raffle_id: &str, user_id: &str) -> NewParticipation {
    NewParticipation {
        raffle_id: raffle_id.to_string(),
        user_id: user_id.to_string(),
        wallet_address: "0xABC".to_string(),
        transaction_hash: "0xdeadbeef".to_string(),
        amount_paid: "2.5".to_string(),
        token_used: "CHZ".to_string(),
    }
}

fn new_season(name: &str, offset_days: i64) -> NewSeason {
    let start = Utc::now() + Duration::days(offset_days);
    NewSeason {
        name: name.to_string(),
        start_date: start,
        end_date: start + Duration::days(30),
    }
}

// ============ Participation ============

#[tokio::test]
async fn test_participation_success() {
    let actions = create_actions().await;
    let raffle_id = create_raffle(&actions, RaffleStatus::Active).await;
    let user_id = create_user(&actions, "0xabc").await;

    let result = actions.create_participation(participation(&raffle_id, &user_id)).await;
    assert!(result.is_ok());
    let receipt = result.into_data().unwrap();
    assert!(!receipt.participation_id.is_empty());

    let user = actions.get_user(&user_id).await.into_data().unwrap();
    assert_eq!(user.total_participations, 1);
    assert_eq!(user.total_points, 1);

    let rows = actions.list_user_participations(&user_id).await.into_data().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].points_earned, 1);
    assert_eq!(rows[0].wallet_address, "0xabc");
}

#[tokio::test]
async fn test_participation_missing_raffle() {
    let actions = create_actions().await;
    let user_id = create_user(&actions, "0xabc").await;

    let result = actions.create_participation(participation("nope", &user_id)).await;
    assert_eq!(result.kind(), Some(ErrorKind::NotFound));
    assert_eq!(result.message(), Some("Raffle not found"));
}

#[tokio::test]
async fn test_participation_inactive_raffle_inserts_nothing() {
    let actions = create_actions().await;
    let user_id = create_user(&actions, "0xabc").await;

    for status in [RaffleStatus::Draft, RaffleStatus::Ended, RaffleStatus::Cancelled] {
        let raffle_id = create_raffle(&actions, RaffleStatus::Draft).await;
        if status != RaffleStatus::Draft {
            if status == RaffleStatus::Ended {
                actions.update_raffle_status(&raffle_id, RaffleStatus::Active).await;
            }
            actions.update_raffle_status(&raffle_id, status).await.into_data().unwrap();
        }

        let result = actions.create_participation(participation(&raffle_id, &user_id)).await;
        assert_eq!(result.kind(), Some(ErrorKind::InvalidState), "status {}", status);
    }

    let rows = actions.list_user_participations(&user_id).await.into_data().unwrap();
    assert!(rows.is_empty());
    let user = actions.get_user(&user_id).await.into_data().unwrap();
    assert_eq!(user.total_participations, 0);
}

#[tokio::test]
async fn test_duplicate_participation_conflicts() {
    let actions = create_actions().await;
    let raffle_id = create_raffle(&actions, RaffleStatus::Active).await;
    let user_id = create_user(&actions, "0xabc").await;

    let first = actions.create_participation(participation(&raffle_id, &user_id)).await;
    assert!(first.is_ok());

    let second = actions.create_participation(participation(&raffle_id, &user_id)).await;
    assert_eq!(second.kind(), Some(ErrorKind::Conflict));
    assert!(second.message().unwrap().contains("already participated"));

    let user = actions.get_user(&user_id).await.into_data().unwrap();
    assert_eq!(user.total_participations, 1);
    assert_eq!(user.total_points, 1);
}

#[tokio::test]
async fn test_concurrent_duplicate_participation() {
    let actions = create_actions().await;
    let raffle_id = create_raffle(&actions, RaffleStatus::Active).await;
    let user_id = create_user(&actions, "0xabc").await;

    let (a, b) = tokio::join!(
        actions.create_participation(participation(&raffle_id, &user_id)),
        actions.create_participation(participation(&raffle_id, &user_id)),
    );

    let successes = [&a, &b].iter().filter(|r| r.is_ok()).count();
    let conflicts = [&a, &b]
        .iter()
        .filter(|r| r.kind() == Some(ErrorKind::Conflict))
        .count();
    assert_eq!(successes, 1);
    assert_eq!(conflicts, 1);

    let user = actions.get_user(&user_id).await.into_data().unwrap();
    assert_eq!(user.total_participations, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_participation_file_db() {
    let path = std::env::temp_dir().join(format!("raffle-{}.db", uuid::Uuid::new_v4()));
    let db = RaffleDatabase::connect(&format!("sqlite://{}", path.display()))
        .await
        .unwrap();
    db.init_schema().await.unwrap();
    let actions = RaffleActions::new(Arc::new(db), RankingPolicy::default());
    let user_id = create_user(&actions, "0xabc").await;

    for _ in 0..10 {
        let raffle_id = create_raffle(&actions, RaffleStatus::Active).await;

        let first = tokio::spawn({
            let actions = actions.clone();
            let input = participation(&raffle_id, &user_id);
            async move { actions.create_participation(input).await }
        });
        let second = tokio::spawn({
            let actions = actions.clone();
            let input = participation(&raffle_id, &user_id);
            async move { actions.create_participation(input).await }
        });
        let results = [first.await.unwrap(), second.await.unwrap()];

        let kinds: Vec<Option<ErrorKind>> = results.iter().map(|r| r.kind()).collect();
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1, "{:?}", kinds);
        assert!(kinds.contains(&Some(ErrorKind::Conflict)), "{:?}", kinds);
    }

    let user = actions.get_user(&user_id).await.into_data().unwrap();
    assert_eq!(user.total_participations, 10);
    assert_eq!(user.total_points, 10);

    actions.database().pool().close().await;
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_participation_unknown_user() {
    let actions = create_actions().await;
    let raffle_id = create_raffle(&actions, RaffleStatus::Active).await;

    let result = actions.create_participation(participation(&raffle_id, "ghost")).await;
    assert_eq!(result.kind(), Some(ErrorKind::NotFound));
    assert_eq!(result.message(), Some("User not found"));
}

#[tokio::test]
async fn test_participation_validation() {
    let actions = create_actions().await;
    let raffle_id = create_raffle(&actions, RaffleStatus::Active).await;
    let user_id = create_user(&actions, "0xabc").await;

    let mut input = participation(&raffle_id, &user_id);
    input.amount_paid = "lots".to_string();
    input.transaction_hash = "  ".to_string();

    let result = actions.create_participation(input).await;
    assert_eq!(result.kind(), Some(ErrorKind::Validation));
    let message = result.message().unwrap();
    assert!(message.contains("amount_paid"));
    assert!(message.contains("transaction_hash"));
}

#[tokio::test]
async fn test_stats_heal_corrupted_counters() {
    let actions = create_actions().await;
    let first = create_raffle(&actions, RaffleStatus::Active).await;
    let second = create_raffle(&actions, RaffleStatus::Active).await;
    let user_id = create_user(&actions, "0xabc").await;

    actions.create_participation(participation(&first, &user_id)).await;

    let corrupted = UserStats {
        total_participations: 42,
        total_points: 999,
    };
    actions
        .database()
        .users
        .update_stats(&user_id, corrupted)
        .await
        .unwrap();

    actions.create_participation(participation(&second, &user_id)).await;

    let user = actions.get_user(&user_id).await.into_data().unwrap();
    assert_eq!(user.total_participations, 2);
    assert_eq!(user.total_points, 2);
}

#[tokio::test]
async fn test_recompute_user_stats() {
    let actions = create_actions().await;
    let raffle_id = create_raffle(&actions, RaffleStatus::Active).await;
    let user_id = create_user(&actions, "0xabc").await;
    actions.create_participation(participation(&raffle_id, &user_id)).await;

    actions
        .database()
        .users
        .update_stats(&user_id, UserStats::default())
        .await
        .unwrap();

    let stats = actions.recompute_user_stats(&user_id).await.into_data().unwrap();
    assert_eq!(stats.total_participations, 1);
    assert_eq!(stats.total_points, 1);

    let missing = actions.recompute_user_stats("ghost").await;
    assert_eq!(missing.kind(), Some(ErrorKind::NotFound));
}

// ============ Lookup ============

#[tokio::test]
async fn test_has_user_participated() {
    let actions = create_actions().await;
    let raffle_id = create_raffle(&actions, RaffleStatus::Active).await;
    let user_id = create_user(&actions, "0xabc").await;

    assert_eq!(
        actions.has_user_participated(&raffle_id, &user_id).await,
        ActionResult::ok(false)
    );
    actions.create_participation(participation(&raffle_id, &user_id)).await;
    assert_eq!(
        actions.has_user_participated(&raffle_id, &user_id).await,
        ActionResult::ok(true)
    );
}

#[tokio::test]
async fn test_participations_for_raffles() {
    let actions = create_actions().await;
    let entered = create_raffle(&actions, RaffleStatus::Active).await;
    let skipped = create_raffle(&actions, RaffleStatus::Active).await;
    let user_id = create_user(&actions, "0xabc").await;
    actions.create_participation(participation(&entered, &user_id)).await;

    let ids = vec![entered.clone(), skipped.clone(), "unknown".to_string()];
    let flags = actions
        .get_user_participations_for_raffles(&user_id, &ids)
        .await
        .into_data()
        .unwrap();

    assert_eq!(flags.len(), 3);
    assert_eq!(flags[&entered], true);
    assert_eq!(flags[&skipped], false);
    assert_eq!(flags["unknown"], false);
}

#[tokio::test]
async fn test_empty_lookup_does_not_touch_store() {
    let actions = create_actions().await;
    actions.database().pool().close().await;

    let result = actions.get_user_participations_for_raffles("u1", &[]).await;
    assert!(result.is_ok());
    assert!(result.into_data().unwrap().is_empty());

    // Any real query fails once the pool is closed
    let failing = actions
        .get_user_participations_for_raffles("u1", &["r1".to_string()])
        .await;
    assert_eq!(failing.kind(), Some(ErrorKind::Internal));
    assert_eq!(failing.message(), Some(raffle_core::INTERNAL_ERROR_MESSAGE));
}

// ============ Ranking ============

#[tokio::test]
async fn test_empty_ranking() {
    let actions = create_actions().await;

    assert_eq!(actions.get_overall_ranking().await, ActionResult::ok(Vec::new()));
    assert_eq!(actions.get_top_organizers().await, ActionResult::ok(Vec::new()));
}

#[tokio::test]
async fn test_overall_ranking() {
    let actions = create_actions().await;
    let low = create_organizer(&actions, "Low", "3").await;
    let high = create_organizer(&actions, "High", "100").await;
    let mid = create_organizer(&actions, "Mid", "12.5").await;

    let ranking = actions.get_overall_ranking().await.into_data().unwrap();
    let order: Vec<&str> = ranking.iter().map(|e| e.organizer_id.as_str()).collect();
    assert_eq!(order, vec![high.as_str(), mid.as_str(), low.as_str()]);

    assert_eq!(ranking[0].rank, 1);
    assert_eq!(ranking[0].points, 1000);
    assert_eq!(ranking[1].rank, 2);
    assert_eq!(ranking[1].points, 125);
    assert_eq!(ranking[2].points, 30);
}

#[tokio::test]
async fn test_ranking_hides_private_fields() {
    let actions = create_actions().await;
    let organizer = actions
        .create_organizer(NewOrganizer {
            name: "Club".to_string(),
            wallet_address: Some("0xclub".to_string()),
            email: Some("club@example.com".to_string()),
            password_hash: Some("hash".to_string()),
            logo_url: Some("https://example.com/logo.png".to_string()),
        })
        .await
        .into_data()
        .unwrap();
    actions.set_organizer_engaged(&organizer.id, "1").await;

    let ranking = actions.get_overall_ranking().await;
    let json = serde_json::to_string(&ranking).unwrap();
    assert!(!json.contains("0xclub"));
    assert!(!json.contains("club@example.com"));
    assert!(!json.contains("hash"));
    assert!(json.contains("logo.png"));
}

#[tokio::test]
async fn test_top_organizers_limit() {
    let actions = create_actions().await;
    for (name, total) in [("A", "1"), ("B", "2"), ("C", "3"), ("D", "4"), ("E", "5")] {
        create_organizer(&actions, name, total).await;
    }

    let top = actions.get_top_organizers().await.into_data().unwrap();
    let names: Vec<&str> = top.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["E", "D", "C"]);
}

#[tokio::test]
async fn test_tie_ranking_policies() {
    for (policy, expected) in [
        (RankingPolicy::Ordinal, vec![1, 2, 3]),
        (RankingPolicy::Dense, vec![1, 1, 2]),
    ] {
        let actions = create_actions_with(policy).await;
        create_organizer(&actions, "A", "10").await;
        create_organizer(&actions, "B", "10.0").await;
        create_organizer(&actions, "C", "1").await;

        let ranking = actions.get_overall_ranking().await.into_data().unwrap();
        let ranks: Vec<u32> = ranking.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, expected, "policy {}", policy);
        assert!(ranking[0].organizer_id < ranking[1].organizer_id);
    }
}

#[tokio::test]
async fn test_ranking_uses_exact_totals() {
    let actions = create_actions_with(RankingPolicy::Dense).await;
    let mut ids = Vec::new();
    for total in [
        "2.00000000000000000001",
        "2.00000000000000000003",
        "2.00000000000000000002",
        "2.00000000000000000001",
    ] {
        ids.push(create_organizer(&actions, "Club", total).await);
    }
    let (first_low, high, mid, second_low) = (&ids[0], &ids[1], &ids[2], &ids[3]);
    let (low_a, low_b) = if first_low < second_low {
        (first_low, second_low)
    } else {
        (second_low, first_low)
    };

    let ranking = actions.get_overall_ranking().await.into_data().unwrap();
    let order: Vec<(&str, u32)> = ranking
        .iter()
        .map(|e| (e.organizer_id.as_str(), e.rank))
        .collect();
    assert_eq!(
        order,
        vec![(high.as_str(), 1), (mid.as_str(), 2), (low_a.as_str(), 3), (low_b.as_str(), 3)]
    );

    let top = actions.get_top_organizers().await.into_data().unwrap();
    let top_ids: Vec<&str> = top.iter().map(|e| e.organizer_id.as_str()).collect();
    assert_eq!(top_ids, vec![high.as_str(), mid.as_str(), low_a.as_str()]);
}

#[tokio::test]
async fn test_season_ranking() {
    let actions = create_actions().await;
    let season = actions.create_season(new_season("S1", 0)).await.into_data().unwrap();
    let a = create_organizer(&actions, "A", "500").await;
    let b = create_organizer(&actions, "B", "1").await;
    create_organizer(&actions, "Outside", "900").await;

    actions.set_season_engaged(&a, &season.id, "2").await.into_data().unwrap();
    actions.set_season_engaged(&b, &season.id, "7.25").await.into_data().unwrap();

    let ranking = actions
        .get_season_ranking(&season.id)
        .await
        .into_data()
        .unwrap()
        .unwrap();
    assert_eq!(ranking.season.id, season.id);
    assert_eq!(ranking.entries.len(), 2);
    assert_eq!(ranking.entries[0].organizer_id, b);
    assert_eq!(ranking.entries[0].points, 72);
    assert_eq!(ranking.entries[1].organizer_id, a);
}

#[tokio::test]
async fn test_missing_season_ranking_is_null() {
    let actions = create_actions().await;

    let result = actions.get_season_ranking("missing").await;
    assert_eq!(result, ActionResult::ok(None));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json, serde_json::json!({ "ok": true, "data": null }));
}

#[tokio::test]
async fn test_unparsable_total_scores_zero() {
    let actions = create_actions().await;
    let organizer_id = create_organizer(&actions, "A", "0").await;
    sqlx::query("UPDATE organizers SET total_chz_engaged = 'n/a' WHERE id = ?")
        .bind(&organizer_id)
        .execute(actions.database().pool())
        .await
        .unwrap();

    let ranking = actions.get_overall_ranking().await.into_data().unwrap();
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].points, 0);
}

// ============ Seasons ============

#[tokio::test]
async fn test_current_season() {
    let actions = create_actions().await;
    assert_eq!(actions.get_current_season().await, ActionResult::ok(None));

    let first = actions.create_season(new_season("S1", 0)).await.into_data().unwrap();
    let second = actions.create_season(new_season("S2", 30)).await.into_data().unwrap();
    assert!(!first.is_active);

    actions.activate_season(&first.id).await.into_data().unwrap();
    let current = actions.get_current_season().await.into_data().unwrap().unwrap();
    assert_eq!(current.id, first.id);

    let activated = actions.activate_season(&second.id).await.into_data().unwrap();
    assert!(activated.is_active);
    let current = actions.get_current_season().await.into_data().unwrap().unwrap();
    assert_eq!(current.id, second.id);

    let seasons = actions.list_seasons().await.into_data().unwrap();
    assert_eq!(seasons.iter().filter(|s| s.is_active).count(), 1);

    let missing = actions.activate_season("missing").await;
    assert_eq!(missing.kind(), Some(ErrorKind::NotFound));
}

#[tokio::test]
async fn test_season_dates_validated() {
    let actions = create_actions().await;
    let start = Utc::now();
    let result = actions
        .create_season(NewSeason {
            name: "Backwards".to_string(),
            start_date: start,
            end_date: start - Duration::days(1),
        })
        .await;
    assert_eq!(result.kind(), Some(ErrorKind::Validation));
}

#[tokio::test]
async fn test_engaged_total_validated() {
    let actions = create_actions().await;
    let organizer_id = create_organizer(&actions, "A", "1").await;

    let negative = actions.set_organizer_engaged(&organizer_id, "-5").await;
    assert_eq!(negative.kind(), Some(ErrorKind::Validation));
    let garbage = actions.set_organizer_engaged(&organizer_id, "many").await;
    assert_eq!(garbage.kind(), Some(ErrorKind::Validation));
    let missing = actions.set_organizer_engaged("ghost", "5").await;
    assert_eq!(missing.kind(), Some(ErrorKind::NotFound));
    let missing_season = actions.set_season_engaged(&organizer_id, "ghost", "5").await;
    assert_eq!(missing_season.kind(), Some(ErrorKind::NotFound));
}

// ============ Users ============

#[tokio::test]
async fn test_register_user() {
    let actions = create_actions().await;

    let user = actions
        .register_user(NewUser {
            wallet_address: Some(" 0xABC ".to_string()),
            email: Some("Fan@Example.com".to_string()),
            username: Some("fan".to_string()),
        })
        .await
        .into_data()
        .unwrap();
    assert_eq!(user.wallet_address.as_deref(), Some("0xabc"));
    assert_eq!(user.email.as_deref(), Some("fan@example.com"));
    assert_eq!(user.stats(), UserStats::default());

    let dup = actions
        .register_user(NewUser {
            wallet_address: Some("0xabc".to_string()),
            ..Default::default()
        })
        .await;
    assert_eq!(dup.kind(), Some(ErrorKind::Conflict));

    let empty = actions.register_user(NewUser::default()).await;
    assert_eq!(empty.kind(), Some(ErrorKind::Validation));

    let found = actions.get_user_by_wallet("0xAbc").await.into_data().unwrap();
    assert_eq!(found.map(|u| u.id), Some(user.id));
}

#[tokio::test]
async fn test_login_with_wallet() {
    let actions = create_actions().await;
    let identity = Identity::wallet("0xFan");

    let created = actions.login_with_wallet(&identity).await.into_data().unwrap();
    assert_eq!(created.wallet_address.as_deref(), Some("0xfan"));

    let again = actions.login_with_wallet(&identity).await.into_data().unwrap();
    assert_eq!(again.id, created.id);

    let unverified = Identity {
        verified: false,
        ..identity
    };
    let rejected = actions.login_with_wallet(&unverified).await;
    assert_eq!(rejected.kind(), Some(ErrorKind::Unauthorized));
}

#[tokio::test]
async fn test_user_stats_report() {
    let actions = create_actions().await;
    let raffle_id = create_raffle(&actions, RaffleStatus::Active).await;
    let user_id = create_user(&actions, "0xabc").await;
    actions.create_participation(participation(&raffle_id, &user_id)).await;

    let report = actions.get_user_stats(&user_id).await.into_data().unwrap();
    assert_eq!(report.stats.total_points, 1);
    assert_eq!(report.participations.len(), 1);
    assert_eq!(report.participations[0].raffle_id, raffle_id);

    let missing = actions.get_user_stats("ghost").await;
    assert_eq!(missing.kind(), Some(ErrorKind::NotFound));
}

// ============ Raffles ============

#[tokio::test]
async fn test_create_raffle_requires_organizer() {
    let actions = create_actions().await;

    let result = actions
        .create_raffle(NewRaffle {
            organizer_id: "ghost".to_string(),
            season_id: None,
            title: "Tickets".to_string(),
            description: None,
            status: RaffleStatus::Draft,
            ticket_price: "1".to_string(),
            token_symbol: "CHZ".to_string(),
        })
        .await;
    assert_eq!(result.kind(), Some(ErrorKind::NotFound));
    assert_eq!(result.message(), Some("Organizer not found"));
}

#[tokio::test]
async fn test_raffle_lifecycle() {
    let actions = create_actions().await;
    let raffle_id = create_raffle(&actions, RaffleStatus::Draft).await;

    let raffle = actions.get_raffle(&raffle_id).await.into_data().unwrap();
    assert_eq!(raffle.status, RaffleStatus::Draft);
    assert_eq!(raffle.token_symbol, "CHZ");

    let active = actions
        .update_raffle_status(&raffle_id, RaffleStatus::Active)
        .await
        .into_data()
        .unwrap();
    assert_eq!(active.status, RaffleStatus::Active);

    let back = actions.update_raffle_status(&raffle_id, RaffleStatus::Draft).await;
    assert_eq!(back.kind(), Some(ErrorKind::InvalidState));

    actions
        .update_raffle_status(&raffle_id, RaffleStatus::Ended)
        .await
        .into_data()
        .unwrap();
    let reopened = actions.update_raffle_status(&raffle_id, RaffleStatus::Active).await;
    assert_eq!(reopened.kind(), Some(ErrorKind::InvalidState));
    assert_eq!(reopened.message(), Some("Raffle is already ENDED"));

    let active_list = actions.list_raffles(Some(RaffleStatus::Active)).await.into_data().unwrap();
    assert!(active_list.is_empty());
    let all = actions.list_raffles(None).await.into_data().unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_contract_raffle_id() {
    let actions = create_actions().await;
    let raffle_id = create_raffle(&actions, RaffleStatus::Active).await;

    assert_eq!(actions.get_contract_raffle_id(&raffle_id).await, ActionResult::ok(None));

    let raffle = actions.attach_contract_id(&raffle_id, 7).await.into_data().unwrap();
    assert_eq!(raffle.contract_raffle_id, Some(7));
    assert_eq!(actions.get_contract_raffle_id(&raffle_id).await, ActionResult::ok(Some(7)));

    let same = actions.attach_contract_id(&raffle_id, 7).await;
    assert!(same.is_ok());
    let other = actions.attach_contract_id(&raffle_id, 8).await;
    assert_eq!(other.kind(), Some(ErrorKind::Conflict));

    let missing = actions.get_contract_raffle_id("ghost").await;
    assert_eq!(missing.kind(), Some(ErrorKind::NotFound));
}
