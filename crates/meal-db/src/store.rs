//! Store layer owning the meal database handle.
//!
//! `MealStore` wraps `MealDb` (raw database access). All repository methods
//! are implemented as `impl MealStore` blocks under `repos/`. The store is
//! constructed explicitly and lent to whoever needs it; there is no global
//! instance.

use crate::MealDb;
use crate::error::DatabaseError;

/// Meal repository over a local libSQL database.
pub struct MealStore {
    db: MealDb,
}

impl MealStore {
    /// Open (or create) a store at `db_path`, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = MealDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `MealDb`.
    #[must_use]
    pub const fn from_db(db: MealDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &MealDb {
        &self.db
    }
}
