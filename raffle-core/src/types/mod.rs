//! Raffle platform domain types

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
