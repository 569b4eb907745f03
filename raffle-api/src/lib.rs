//! Raffle API Server
//!
//! REST endpoints over the raffle actions. Every body is an envelope:
//! `{"ok": true, "data": ...}` or `{"ok": false, "message": ..., "kind": ...}`,
//! with the HTTP status derived from `kind`.
//!
//! ## Endpoints
//!
//! ### Rankings
//! - GET /api/v1/ranking - Overall leaderboard
//! - GET /api/v1/ranking/top - Top 3 organizers
//! - GET /api/v1/seasons/current - Active season
//! - GET /api/v1/seasons/:season_id/ranking - Season leaderboard
//!
//! ### Raffles
//! - GET /api/v1/raffles - List raffles (`?status=`)
//! - GET /api/v1/raffles/:raffle_id - Get raffle
//! - GET /api/v1/raffles/:raffle_id/contract - On-chain raffle id
//!
//! ### Participations (session)
//! - POST /api/v1/participations - Enter a raffle
//! - GET /api/v1/participations/check - Has the user entered `?raffle_id=`
//! - POST /api/v1/participations/lookup - Flags for many raffles
//!
//! ### Users
//! - POST /api/v1/auth/wallet - Wallet login (session)
//! - GET /api/v1/me - Session user
//! - POST /api/v1/users - Register
//! - GET /api/v1/users/:user_id/stats - Counters and history
//!
//! ### Backoffice (`X-Admin-Key`)
//! - POST /admin/organizers - Create organizer
//! - PUT /admin/organizers/:organizer_id/engaged - Set engaged total
//! - GET, POST /admin/seasons - List / create seasons
//! - POST /admin/seasons/:season_id/activate - Activate season
//! - PUT /admin/seasons/:season_id/organizers/:organizer_id/engaged - Set season total
//! - POST /admin/raffles - Create raffle
//! - POST /admin/raffles/:raffle_id/status - Change status
//! - POST /admin/raffles/:raffle_id/contract - Attach contract raffle id

pub mod auth;
pub mod dto;
pub mod error;
pub mod extract;
pub mod routes;
pub mod server;
pub mod state;

pub use auth::{JwtConfig, JwtConfigError, JwtSessionValidator, SessionClaims};
pub use dto::*;
pub use error::*;
pub use extract::*;
pub use routes::*;
pub use server::*;
pub use state::*;
