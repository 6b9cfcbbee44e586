//! Battle engine error types.

use meal_db::error::DatabaseError;
use meal_random::RandomError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BattleError {
    /// The ring already holds two combatants.
    #[error("Combatant list is full, cannot add more combatants.")]
    RingFull,

    /// `battle` was called without exactly two staged combatants.
    #[error("Two combatants must be prepped for a battle.")]
    InsufficientCombatants,

    /// The random draw failed; nothing was recorded.
    #[error(transparent)]
    Random(#[from] RandomError),

    /// Lookup or stats update failed; nothing was recorded.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
