//! Ring staging, scoring, and winner selection.

use meal_core::entities::{BattleOutcome, Meal};
use meal_db::store::MealStore;
use meal_random::RandomSource;

use crate::error::BattleError;

/// Maximum number of staged combatants.
pub const RING_CAPACITY: usize = 2;

/// Battle score of a meal: `price × cuisine length − difficulty penalty`.
///
/// Cuisine length counts characters, not bytes.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score(meal: &Meal) -> f64 {
    meal.price * meal.cuisine.chars().count() as f64 - meal.difficulty.penalty()
}

/// Stages up to two meals and runs battles between them.
///
/// The ring holds the meal records as they were when staged. After a battle
/// the winner stays staged with its pre-battle counters.
pub struct BattleEngine<'s, R> {
    store: &'s MealStore,
    random: R,
    ring: Vec<Meal>,
}

impl<'s, R: RandomSource> BattleEngine<'s, R> {
    /// Create an engine with an empty ring.
    pub const fn new(store: &'s MealStore, random: R) -> Self {
        Self {
            store,
            random,
            ring: Vec::new(),
        }
    }

    /// Add `meal` to the ring.
    ///
    /// # Errors
    ///
    /// `BattleError::RingFull` if two meals are already staged; the ring is
    /// left as it was.
    pub fn stage(&mut self, meal: Meal) -> Result<(), BattleError> {
        if self.ring.len() >= RING_CAPACITY {
            tracing::error!(name = %meal.name, "attempted to add combatant but list is full");
            return Err(BattleError::RingFull);
        }
        tracing::info!(name = %meal.name, "adding combatant");
        self.ring.push(meal);
        tracing::debug!(staged = self.ring.len(), "ring updated");
        Ok(())
    }

    /// Look up a live meal by ID and stage it.
    ///
    /// # Errors
    ///
    /// `BattleError::RingFull`, or `BattleError::Database` if the meal is
    /// missing or deleted.
    pub async fn stage_by_id(&mut self, id: &str) -> Result<(), BattleError> {
        self.ensure_room()?;
        let meal = self.store.get_by_id(id).await?;
        self.stage(meal)
    }

    /// Look up a live meal by name and stage it.
    ///
    /// # Errors
    ///
    /// `BattleError::RingFull`, or `BattleError::Database` if no live meal
    /// has this name.
    pub async fn stage_by_name(&mut self, name: &str) -> Result<(), BattleError> {
        self.ensure_room()?;
        let meal = self.store.get_by_name(name).await?;
        self.stage(meal)
    }

    /// Empty the ring.
    pub fn clear(&mut self) {
        tracing::info!("clearing combatants");
        self.ring.clear();
    }

    /// Currently staged meals, in staging order.
    #[must_use]
    pub fn combatants(&self) -> &[Meal] {
        &self.ring
    }

    /// Run a battle and return the winner's name.
    ///
    /// # Errors
    ///
    /// See [`Self::battle_detailed`].
    pub async fn battle(&mut self) -> Result<String, BattleError> {
        let outcome = self.battle_detailed().await?;
        Ok(outcome.winner.name)
    }

    /// Run a battle between the two staged meals.
    ///
    /// Scores both, draws one random fraction, records a win for the winner
    /// and a loss for the loser, and evicts the loser from the ring.
    ///
    /// # Errors
    ///
    /// - `BattleError::InsufficientCombatants` unless exactly two are staged.
    /// - `BattleError::Random` if the draw fails.
    /// - `BattleError::Database` if recording the result fails.
    ///
    /// On any error the ring and the stored counters are unchanged.
    pub async fn battle_detailed(&mut self) -> Result<BattleOutcome, BattleError> {
        let [first, second] = self.ring.as_slice() else {
            tracing::error!(staged = self.ring.len(), "not enough combatants to start a battle");
            return Err(BattleError::InsufficientCombatants);
        };
        let (first, second) = (first.clone(), second.clone());
        tracing::info!(first = %first.name, second = %second.name, "two meals enter, one meal leaves");

        let first_score = score(&first);
        let second_score = score(&second);
        tracing::info!(meal = %first.name, score = first_score, "combatant score");
        tracing::info!(meal = %second.name, score = second_score, "combatant score");

        let delta = (first_score - second_score).abs() / 100.0;
        tracing::info!(delta, "score delta");

        let draw = self.random.draw().await?;
        tracing::info!(draw, "random number drawn");

        // Only the size of the gap matters: the first-staged meal wins on
        // `delta > draw` even when it has the lower score.
        let first_won = delta > draw;
        let (winner, loser, loser_idx) = if first_won {
            (first, second, 1)
        } else {
            (second, first, 0)
        };

        self.store.record_battle(&winner.id, &loser.id).await?;
        self.ring.remove(loser_idx);
        tracing::info!(winner = %winner.name, loser = %loser.name, "battle decided");

        Ok(BattleOutcome {
            winner,
            loser,
            first_score,
            second_score,
            delta,
            draw,
        })
    }

    fn ensure_room(&self) -> Result<(), BattleError> {
        if self.ring.len() >= RING_CAPACITY {
            tracing::error!("combatant list is full");
            return Err(BattleError::RingFull);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use meal_core::enums::Difficulty;
    use rstest::rstest;

    fn meal(cuisine: &str, price: f64, difficulty: Difficulty) -> Meal {
        Meal {
            id: "mel-00000000".to_string(),
            name: "Test".to_string(),
            cuisine: cuisine.to_string(),
            price,
            difficulty,
            battles: 0,
            wins: 0,
            deleted: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[rstest]
    #[case("Italian", 10.0, Difficulty::Med, 68.0)]
    #[case("Mexican", 15.0, Difficulty::High, 104.0)]
    #[case("Thai", 2.5, Difficulty::Low, 7.0)]
    #[case("Café", 1.0, Difficulty::High, 3.0)]
    fn score_formula(
        #[case] cuisine: &str,
        #[case] price: f64,
        #[case] difficulty: Difficulty,
        #[case] expected: f64,
    ) {
        assert!((score(&meal(cuisine, price, difficulty)) - expected).abs() < 1e-9);
    }

    #[test]
    fn score_is_pure() {
        let m = meal("Japanese", 12.0, Difficulty::Low);
        assert!((score(&m) - score(&m)).abs() < f64::EPSILON);
        assert_eq!(m.battles, 0);
    }
}
