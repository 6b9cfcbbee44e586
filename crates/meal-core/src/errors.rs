//! Cross-cutting error types for MealMax.
//!
//! Errors raised while parsing or validating domain values before they reach
//! the store. Store errors (`DatabaseError`), random-source errors
//! (`RandomError`) and battle errors (`BattleError`) live in their own crates
//! and converge into `anyhow` in `meal-cli`.

use thiserror::Error;

/// Errors that can be raised by any MealMax crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (range, format, allowed set).
    #[error("{0}")]
    Validation(String),

    /// An unsupported leaderboard sort key was requested.
    #[error("Invalid sort_by parameter: {0}")]
    InvalidSortKey(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
