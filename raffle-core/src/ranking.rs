//! Organizer leaderboards
//!
//! Points are never stored for organizers. They are derived from the
//! engaged value at read time: `points = floor(engaged * 10)`.
//!
//! [`rank_entries`] orders candidates by their exact decimal value, highest
//! first, keeping the incoming order for equal totals. Unparsable totals
//! sort last. The policy only decides how equal totals are numbered:
//!
//! | engaged | ordinal | dense |
//! |---------|---------|-------|
//! | 20      | 1       | 1     |
//! | 12.5    | 2       | 2     |
//! | 12.50   | 3       | 2     |
//! | 3       | 4       | 3     |

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::Season;

/// Points awarded per engaged unit
pub const POINTS_PER_ENGAGED_UNIT: i64 = 10;

/// Size of the top organizers podium
pub const TOP_ORGANIZERS_LIMIT: usize = 3;

/// How equal engaged totals are ranked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingPolicy {
    /// Positional rank: equal totals get consecutive ranks
    #[default]
    Ordinal,
    /// Equal totals share a rank, the next distinct total gets rank + 1
    Dense,
}

impl RankingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ordinal => "ordinal",
            Self::Dense => "dense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ordinal" | "positional" => Some(Self::Ordinal),
            "dense" => Some(Self::Dense),
            _ => None,
        }
    }
}

impl std::fmt::Display for RankingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a decimal string, accepting scientific notation
pub fn parse_engaged(total: &str) -> Option<Decimal> {
    let trimmed = total.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Derive leaderboard points from an engaged total
///
/// Returns `None` when the value is not a number or overflows.
pub fn derive_points(total: &str) -> Option<i64> {
    let value = parse_engaged(total)?;
    value
        .checked_mul(Decimal::from(POINTS_PER_ENGAGED_UNIT))?
        .floor()
        .to_i64()
}

/// An organizer about to be ranked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingCandidate {
    pub organizer_id: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub total_chz_engaged: String,
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// 1-based
    pub rank: u32,
    pub organizer_id: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub total_chz_engaged: String,
    pub points: i64,
}

/// Leaderboard scoped to one season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRanking {
    pub season: Season,
    pub entries: Vec<RankingEntry>,
}

/// Sort the candidates, number them and attach derived points
///
/// Unparsable totals earn 0 points and are reported through `on_invalid`.
pub fn rank_entries(
    candidates: Vec<RankingCandidate>,
    policy: RankingPolicy,
    mut on_invalid: impl FnMut(&RankingCandidate),
) -> Vec<RankingEntry> {
    let mut valued: Vec<(Option<Decimal>, RankingCandidate)> = candidates
        .into_iter()
        .map(|candidate| (parse_engaged(&candidate.total_chz_engaged), candidate))
        .collect();
    // Stable: equal totals keep the caller's tie order. `None` sorts below any value.
    valued.sort_by(|(a, _), (b, _)| b.cmp(a));

    let mut entries = Vec::with_capacity(valued.len());
    let mut previous: Option<Option<Decimal>> = None;
    let mut rank = 0u32;

    for (index, (value, candidate)) in valued.into_iter().enumerate() {
        let points = match derive_points(&candidate.total_chz_engaged) {
            Some(points) => points,
            None => {
                on_invalid(&candidate);
                0
            }
        };

        rank = match policy {
            RankingPolicy::Ordinal => index as u32 + 1,
            RankingPolicy::Dense => match previous {
                Some(prev) if prev == value => rank,
                _ => rank + 1,
            },
        };
        previous = Some(value);

        entries.push(RankingEntry {
            rank,
            organizer_id: candidate.organizer_id,
            name: candidate.name,
            logo_url: candidate.logo_url,
            total_chz_engaged: candidate.total_chz_engaged,
            points,
        });
    }

    entries
}
