//! # meal-battle
//!
//! Pits two staged meals against each other.
//!
//! The [`BattleEngine`] holds a ring of at most two combatants, scores
//! them, asks its [`RandomSource`](meal_random::RandomSource) for one draw,
//! records the result in the [`MealStore`](meal_db::store::MealStore), and
//! evicts the loser. The engine borrows the store and owns its random
//! source; it keeps no global state.

mod engine;
mod error;

pub use engine::{BattleEngine, RING_CAPACITY, score};
pub use error::BattleError;
