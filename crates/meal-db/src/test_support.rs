//! Shared test utilities for meal-db unit tests.

pub(crate) mod helpers {
    use meal_core::entities::Meal;
    use meal_core::enums::Difficulty;

    use crate::store::MealStore;

    /// Create an in-memory store.
    pub async fn test_store() -> MealStore {
        MealStore::new_local(":memory:").await.unwrap()
    }

    /// Create a meal and return the stored record.
    pub async fn seed_meal(
        store: &MealStore,
        name: &str,
        cuisine: &str,
        price: f64,
        difficulty: Difficulty,
    ) -> Meal {
        let id = store.create(name, cuisine, price, difficulty).await.unwrap();
        store.get_by_id(&id).await.unwrap()
    }
}
