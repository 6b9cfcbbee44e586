//! Difficulty tiers, battle results, and leaderboard sort keys.
//!
//! `Difficulty` serializes in upper case (`"LOW"`, `"MED"`, `"HIGH"`) because
//! that is how it is stored and typed by users. The other enums use
//! `snake_case`. Every enum parses from text via `FromStr`, which is the
//! boundary where user input is validated.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// How hard a meal is to prepare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Low,
    Med,
    High,
}

impl Difficulty {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Med => "MED",
            Self::High => "HIGH",
        }
    }

    /// Subtractive term applied to the battle score.
    ///
    /// Harder meals are penalized less.
    #[must_use]
    pub const fn penalty(self) -> f64 {
        match self {
            Self::High => 1.0,
            Self::Med => 2.0,
            Self::Low => 3.0,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Self::Low),
            "MED" => Ok(Self::Med),
            "HIGH" => Ok(Self::High),
            other => Err(CoreError::Validation(format!(
                "Invalid difficulty level: {other}. Must be 'LOW', 'MED', or 'HIGH'."
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// BattleResult
// ---------------------------------------------------------------------------

/// Outcome recorded against one meal after a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BattleResult {
    Win,
    Loss,
}

impl BattleResult {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Loss => "loss",
        }
    }

    /// Amount added to the `wins` counter.
    #[must_use]
    pub const fn win_increment(self) -> i64 {
        match self {
            Self::Win => 1,
            Self::Loss => 0,
        }
    }
}

impl fmt::Display for BattleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BattleResult {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(Self::Win),
            "loss" => Ok(Self::Loss),
            other => Err(CoreError::Validation(format!(
                "Invalid result: {other}. Expected 'win' or 'loss'."
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// LeaderboardSort
// ---------------------------------------------------------------------------

/// Key the leaderboard is ordered by (always descending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardSort {
    #[default]
    Wins,
    WinPct,
}

impl LeaderboardSort {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wins => "wins",
            Self::WinPct => "win_pct",
        }
    }
}

impl fmt::Display for LeaderboardSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaderboardSort {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wins" => Ok(Self::Wins),
            "win_pct" => Ok(Self::WinPct),
            other => Err(CoreError::InvalidSortKey(other.to_string())),
        }
    }
}
