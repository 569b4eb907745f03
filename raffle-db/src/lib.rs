//! Raffle Database Layer
//!
//! Relational storage for the raffle platform, backed by SQLite through
//! `sqlx`.
//!
//! # Layout
//!
//! - `repos` - one repository per table plus the [`RaffleDatabase`] handle
//! - `services` - business rules over the repositories
//! - `actions` - the envelope-returning facade used by the API and CLI
//!
//! # Usage
//!
//! ```ignore
//! use raffle_db::{RaffleActions, RaffleDatabase};
//! use raffle_core::RankingPolicy;
//! use std::sync::Arc;
//!
//! async fn example() {
//!     let db = Arc::new(RaffleDatabase::connect("sqlite://raffle.db").await.unwrap());
//!     db.init_schema().await.unwrap();
//!     let actions = RaffleActions::new(db, RankingPolicy::default());
//!     let ranking = actions.get_overall_ranking().await;
//! }
//! ```

pub mod actions;
pub mod entities;
pub mod error;
pub mod repos;
pub mod schema;
pub mod services;

pub use actions::RaffleActions;
pub use entities::*;
pub use error::*;
pub use repos::*;
pub use schema::RAFFLE_SCHEMA;
pub use services::{
    BackofficeService, ParticipationService, RaffleService, RankingService, UserService,
};
