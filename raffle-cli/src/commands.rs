//! Command handlers for the CLI

use raffle_core::{ActionResult, RankingEntry, RankingPolicy};
use raffle_db::{RaffleActions, RaffleDatabase};
use serde::Serialize;
use std::sync::Arc;

use crate::SeasonCommands;

pub(crate) type CmdResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

async fn open_actions(db_url: &str, policy: RankingPolicy) -> Result<RaffleActions, raffle_db::DbError> {
    let database = RaffleDatabase::connect(db_url).await?;
    database.init_schema().await?;
    Ok(RaffleActions::new(Arc::new(database), policy))
}

/// Print the payload, or turn a failed envelope into an error
fn print_result<T: Serialize>(result: ActionResult<T>) -> CmdResult {
    match result {
        ActionResult::Ok { data } => {
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        }
        ActionResult::Err { message, kind } => Err(format!("{} ({})", message, kind).into()),
    }
}

fn print_table(entries: &[RankingEntry]) {
    if entries.is_empty() {
        println!("No organizers ranked yet.");
        return;
    }

    println!("{:>4}  {:<32}  {:>16}  {:>10}", "RANK", "ORGANIZER", "ENGAGED", "POINTS");
    for entry in entries {
        println!(
            "{:>4}  {:<32}  {:>16}  {:>10}",
            entry.rank, entry.name, entry.total_chz_engaged, entry.points
        );
    }
}

/// Handle `init`
pub async fn handle_init(db_url: &str) -> CmdResult {
    println!("Initializing raffle database at {}...", db_url);

    let database = RaffleDatabase::connect(db_url).await?;
    database.init_schema().await?;

    println!("Database schema initialized successfully.");
    Ok(())
}

/// Handle `ranking`
pub async fn handle_ranking(
    db_url: &str,
    policy: RankingPolicy,
    season: Option<String>,
    top: bool,
) -> CmdResult {
    let actions = open_actions(db_url, policy).await?;

    let entries = match season {
        Some(season_id) => match actions.get_season_ranking(&season_id).await {
            ActionResult::Ok { data: Some(ranking) } => {
                println!("Season: {} ({})", ranking.season.name, ranking.season.id);
                ranking.entries
            }
            ActionResult::Ok { data: None } => {
                println!("Season {} not found.", season_id);
                return Ok(());
            }
            ActionResult::Err { message, kind } => return Err(format!("{} ({})", message, kind).into()),
        },
        None => {
            let result = if top {
                actions.get_top_organizers().await
            } else {
                actions.get_overall_ranking().await
            };
            match result {
                ActionResult::Ok { data } => data,
                ActionResult::Err { message, kind } => {
                    return Err(format!("{} ({})", message, kind).into())
                }
            }
        }
    };

    let shown = if top && entries.len() > raffle_core::ranking::TOP_ORGANIZERS_LIMIT {
        &entries[..raffle_core::ranking::TOP_ORGANIZERS_LIMIT]
    } else {
        &entries[..]
    };
    print_table(shown);
    Ok(())
}

/// Handle `season` subcommands
pub async fn handle_season_command(action: SeasonCommands, db_url: &str) -> CmdResult {
    let actions = open_actions(db_url, RankingPolicy::default()).await?;

    match action {
        SeasonCommands::Current => match actions.get_current_season().await {
            ActionResult::Ok { data: None } => {
                println!("No active season.");
                Ok(())
            }
            other => print_result(other),
        },
        SeasonCommands::List => print_result(actions.list_seasons().await),
        SeasonCommands::Activate { season_id } => {
            print_result(actions.activate_season(&season_id).await)
        }
    }
}

/// Handle `recompute`
pub async fn handle_recompute(db_url: &str, user_id: &str) -> CmdResult {
    let actions = open_actions(db_url, RankingPolicy::default()).await?;
    print_result(actions.recompute_user_stats(user_id).await)
}
