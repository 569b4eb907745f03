//! Raffle Core
//!
//! Domain types and business rules for the raffle rewards platform:
//!
//! - [`ActionResult`] - the success/error envelope every action returns
//! - [`ActionError`] - the failure taxonomy carried inside the envelope
//! - [`ranking`] - derived organizer points and rank numbering
//! - [`SessionValidator`] - the identity provider seam
//!
//! Persistence lives in `raffle-db`, the HTTP surface in `raffle-api`.

pub mod envelope;
pub mod error;
pub mod logging;
pub mod ranking;
pub mod session;
pub mod types;

pub use envelope::*;
pub use error::*;
pub use ranking::{RankingCandidate, RankingEntry, RankingPolicy, SeasonRanking};
pub use session::*;
pub use types::*;
