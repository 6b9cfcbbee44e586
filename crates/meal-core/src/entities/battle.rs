use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Meal;

/// Everything decided during one battle.
///
/// `winner` and `loser` are the staged snapshots taken before the counters
/// were incremented. `first_score` and `second_score` follow staging order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BattleOutcome {
    pub winner: Meal,
    pub loser: Meal,
    pub first_score: f64,
    pub second_score: f64,
    pub delta: f64,
    pub draw: f64,
}

impl BattleOutcome {
    /// Display name of the winning meal.
    #[must_use]
    pub fn winner_name(&self) -> &str {
        &self.winner.name
    }

    /// Whether the first-staged combatant won.
    #[must_use]
    pub fn first_won(&self) -> bool {
        self.delta > self.draw
    }
}
