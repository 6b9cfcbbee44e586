//! # meal-db
//!
//! libSQL persistence for MealMax meals.
//!
//! Holds every persisted meal with its battle counters and soft-delete flag.
//! `MealDb` owns the raw database handle; `MealStore` layers the meal
//! repository (create, lookup, soft delete, stats, leaderboard) on top.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod store;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for the meal store.
///
/// Wraps a libSQL database and connection. Provides ID generation and the
/// connection the repository methods run their statements on.
pub struct MealDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl MealDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let meal_db = Self { db, conn };
        meal_db.run_migrations().await?;
        tracing::debug!(path, "meal database opened");
        Ok(meal_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"mel-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "SELECT ?1 || '-' || lower(hex(randomblob(4)))",
                [prefix],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    async fn test_db() -> MealDb {
        MealDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                ["meals"],
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some(), "meals table should exist");
    }

    #[tokio::test]
    async fn live_name_index_exists() {
        let db = test_db().await;

        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type='index' AND name=?1",
                ["idx_meals_live_name"],
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("mel").await.unwrap();
        assert!(id.starts_with("mel-"), "ID should start with 'mel-': {id}");
        assert_eq!(id.len(), 12, "ID should be 12 chars: {id}");

        let hex_part = &id[4..];
        assert!(
            hex_part.chars().all(|c| c.is_ascii_hexdigit()),
            "Random part should be hex: {hex_part}"
        );
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in meal_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn price_check_constraint_enforced() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO meals (id, name, cuisine, price, difficulty) VALUES ('mel-x', 'Bad', 'None', -1.0, 'LOW')",
                (),
            )
            .await;
        assert!(result.is_err(), "non-positive price should be rejected by schema");
    }

    #[tokio::test]
    async fn deleted_rows_do_not_hold_the_name() {
        let db = test_db().await;
        db.conn()
            .execute(
                "INSERT INTO meals (id, name, cuisine, price, difficulty, deleted) VALUES ('mel-1', 'Pasta', 'Italian', 10.0, 'MED', 1)",
                (),
            )
            .await
            .unwrap();
        db.conn()
            .execute(
                "INSERT INTO meals (id, name, cuisine, price, difficulty) VALUES ('mel-2', 'Pasta', 'Italian', 12.0, 'MED')",
                (),
            )
            .await
            .unwrap();

        let duplicate = db
            .conn()
            .execute(
                "INSERT INTO meals (id, name, cuisine, price, difficulty) VALUES ('mel-3', 'Pasta', 'Italian', 12.0, 'MED')",
                (),
            )
            .await;
        assert!(duplicate.is_err(), "two live meals cannot share a name");
    }
}
