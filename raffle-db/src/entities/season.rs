//! Season rows

use chrono::{DateTime, Utc};
use raffle_core::{NewSeason, Season};

use super::{new_id, Entity};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SeasonRow {
    pub id: String,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
}

impl Entity for SeasonRow {
    const TABLE: &'static str = "seasons";
}

impl SeasonRow {
    pub fn new(input: NewSeason) -> Self {
        Self {
            id: new_id(),
            name: input.name,
            start_date: input.start_date,
            end_date: input.end_date,
            is_active: false,
        }
    }
}

impl From<SeasonRow> for Season {
    fn from(row: SeasonRow) -> Self {
        Season {
            id: row.id,
            name: row.name,
            start_date: row.start_date,
            end_date: row.end_date,
            is_active: row.is_active,
        }
    }
}
