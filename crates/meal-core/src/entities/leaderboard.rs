use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Difficulty;

/// One ranked row of the leaderboard.
///
/// Only meals with at least one battle appear, so `win_pct` is always defined.
/// It is a percentage rounded to one decimal place.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
    pub battles: u32,
    pub wins: u32,
    pub win_pct: f64,
}

impl LeaderboardEntry {
    /// `100 × wins / battles`, rounded to one decimal place.
    ///
    /// Returns `0.0` when `battles` is zero.
    #[must_use]
    pub fn win_pct_of(wins: u32, battles: u32) -> f64 {
        if battles == 0 {
            return 0.0;
        }
        let pct = f64::from(wins) * 100.0 / f64::from(battles);
        (pct * 10.0).round() / 10.0
    }
}
