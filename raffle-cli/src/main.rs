//! Raffle Command Line Interface
//!
//! Usage:
//!   raffle init                 - Apply the database schema
//!   raffle start                - Start the API server
//!   raffle ranking              - Print the overall leaderboard
//!   raffle ranking --season ID  - Print a season leaderboard
//!   raffle season current       - Show the active season
//!   raffle recompute USER_ID    - Rebuild a user's counters

use clap::{Parser, Subcommand};
use raffle_api::{run_server, ApiConfig};
use raffle_core::logging::{init_logging, LogConfig, LogFormat, LogLevel};
use raffle_core::RankingPolicy;

mod commands;

#[derive(Parser)]
#[command(name = "raffle")]
#[command(about = "Raffle rewards platform CLI")]
#[command(version)]
struct Cli {
    /// Database URL
    #[arg(long, env = "RAFFLE_DATABASE_URL", default_value = "sqlite://raffle.db")]
    db_url: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "RAFFLE_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Log format (pretty, json, compact)
    #[arg(long, env = "RAFFLE_LOG_FORMAT", default_value = "pretty")]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema
    Init,

    /// Start the API server
    Start {
        /// Host to bind to
        #[arg(short = 'H', long, env = "RAFFLE_HOST", default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short, long, env = "RAFFLE_PORT", default_value = "3000")]
        port: u16,
    },

    /// Print a leaderboard
    Ranking {
        /// Season ID (overall ranking when omitted)
        #[arg(short, long)]
        season: Option<String>,
        /// Only the top 3 organizers
        #[arg(short, long)]
        top: bool,
        /// Tie policy (ordinal, dense)
        #[arg(long, env = "RAFFLE_RANKING_POLICY", default_value = "ordinal")]
        policy: String,
    },

    /// Season management
    Season {
        #[command(subcommand)]
        action: SeasonCommands,
    },

    /// Rebuild a user's counters from their participations
    Recompute {
        /// User ID
        user_id: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum SeasonCommands {
    /// Show the active season
    Current,
    /// List all seasons
    List,
    /// Make a season the only active one
    Activate {
        /// Season ID
        season_id: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig {
        level: LogLevel::parse(&cli.log_level).unwrap_or_default(),
        format: LogFormat::parse(&cli.log_format).unwrap_or_default(),
        ..LogConfig::default()
    };
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run_command(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_command(cli: Cli) -> commands::CmdResult {
    match cli.command {
        Commands::Init => commands::handle_init(&cli.db_url).await,

        Commands::Start { host, port } => {
            println!("Starting raffle API server on {}:{}...", host, port);

            let config = ApiConfig {
                host,
                port,
                database_url: cli.db_url,
                ..ApiConfig::from_env()
            };

            run_server(config).await?;
            Ok(())
        }

        Commands::Ranking { season, top, policy } => {
            let policy = RankingPolicy::parse(&policy)
                .ok_or_else(|| format!("unknown ranking policy: {}", policy))?;
            commands::handle_ranking(&cli.db_url, policy, season, top).await
        }

        Commands::Season { action } => commands::handle_season_command(action, &cli.db_url).await,

        Commands::Recompute { user_id } => commands::handle_recompute(&cli.db_url, &user_id).await,
    }
}
