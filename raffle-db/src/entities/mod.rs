//! Row types for the raffle tables
//!
//! Each row maps one table and converts into its `raffle-core` domain type.

mod organizer;
mod participation;
mod raffle;
mod season;
mod user;

pub use organizer::*;
pub use participation::*;
pub use raffle::*;
pub use season::*;
pub use user::*;

/// A row type backed by a table
pub trait Entity {
    const TABLE: &'static str;
}

/// Fresh primary key
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
