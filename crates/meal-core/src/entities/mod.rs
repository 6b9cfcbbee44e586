//! Entity structs for MealMax domain objects.
//!
//! `Meal` maps to the `meals` table. `LeaderboardEntry` is a projection of
//! that table and `BattleOutcome` is never persisted. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON output and schema
//! validation.

mod battle;
mod leaderboard;
mod meal;

pub use battle::BattleOutcome;
pub use leaderboard::LeaderboardEntry;
pub use meal::Meal;
