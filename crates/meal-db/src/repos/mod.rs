//! Repository modules implementing meal operations.
//!
//! Each module adds methods to `MealStore` via `impl MealStore` blocks.

pub mod leaderboard;
pub mod meal;
