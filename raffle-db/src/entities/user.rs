//! User rows

use chrono::{DateTime, Utc};
use raffle_core::{NewUser, User};

use super::{new_id, Entity};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: String,
    pub wallet_address: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub total_participations: i64,
    pub total_points: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for UserRow {
    const TABLE: &'static str = "users";
}

impl UserRow {
    /// New user with zeroed counters
    pub fn new(input: NewUser) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            wallet_address: input.wallet_address,
            email: input.email,
            username: input.username,
            total_participations: 0,
            total_points: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            wallet_address: row.wallet_address,
            email: row.email,
            username: row.username,
            total_participations: row.total_participations,
            total_points: row.total_points,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
