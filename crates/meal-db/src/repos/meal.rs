//! Meal repository: create, lookup, soft delete, battle stats.

use chrono::Utc;

use meal_core::entities::Meal;
use meal_core::enums::{BattleResult, Difficulty};
use meal_core::ids::PREFIX_MEAL;

use crate::error::DatabaseError;
use crate::helpers::{ensure_live, get_count, get_flag, is_unique_violation, parse_datetime, parse_enum};
use crate::store::MealStore;

pub(crate) const SELECT_COLS: &str =
    "id, name, cuisine, price, difficulty, battles, wins, deleted, created_at, updated_at";

pub(crate) fn row_to_meal(row: &libsql::Row) -> Result<Meal, DatabaseError> {
    Ok(Meal {
        id: row.get(0)?,
        name: row.get(1)?,
        cuisine: row.get(2)?,
        price: row.get::<f64>(3)?,
        difficulty: parse_enum(&row.get::<String>(4)?)?,
        battles: get_count(row, 5)?,
        wins: get_count(row, 6)?,
        deleted: get_flag(row, 7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

/// Reject input that must never reach the table.
fn validate_new_meal(name: &str, cuisine: &str, price: f64) -> Result<(), DatabaseError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(DatabaseError::Validation(format!(
            "Invalid price: {price}. Price must be a positive number."
        )));
    }
    if name.trim().is_empty() {
        return Err(DatabaseError::Validation(
            "Invalid meal name: name must not be empty.".to_string(),
        ));
    }
    if cuisine.trim().is_empty() {
        return Err(DatabaseError::Validation(
            "Invalid cuisine: cuisine must not be empty.".to_string(),
        ));
    }
    Ok(())
}

/// The `deleted` flag of the row with `id`, or `None` if there is no such row.
async fn deleted_flag(conn: &libsql::Connection, id: &str) -> Result<Option<bool>, DatabaseError> {
    let mut rows = conn
        .query("SELECT deleted FROM meals WHERE id = ?1", [id])
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(get_flag(&row, 0)?)),
        None => Ok(None),
    }
}

/// Increment the counters of one live meal on `conn`.
///
/// A single UPDATE so the increment is atomic at the store level.
async fn apply_result(
    conn: &libsql::Connection,
    id: &str,
    outcome: BattleResult,
) -> Result<(), DatabaseError> {
    ensure_live(id, deleted_flag(conn, id).await?, || {
        DatabaseError::not_found_id(id)
    })?;

    conn.execute(
        "UPDATE meals
         SET battles = battles + 1, wins = wins + ?1, updated_at = ?2
         WHERE id = ?3 AND deleted = 0",
        libsql::params![outcome.win_increment(), Utc::now().to_rfc3339(), id],
    )
    .await?;

    tracing::debug!(id, %outcome, "meal stats updated");
    Ok(())
}

impl MealStore {
    /// Insert a new meal with zeroed counters and return its ID.
    ///
    /// # Errors
    ///
    /// - `DatabaseError::Validation` if `price` is not a positive number or
    ///   `name` or `cuisine` is blank.
    /// - `DatabaseError::Conflict` if a live meal already uses `name`.
    pub async fn create(
        &self,
        name: &str,
        cuisine: &str,
        price: f64,
        difficulty: Difficulty,
    ) -> Result<String, DatabaseError> {
        if let Err(e) = validate_new_meal(name, cuisine, price) {
            tracing::error!(name, price, "rejected meal: {e}");
            return Err(e);
        }

        if self.live_id_by_name(name).await?.is_some() {
            tracing::error!(name, "meal with this name already exists");
            return Err(DatabaseError::Conflict {
                name: name.to_string(),
            });
        }

        let now = Utc::now().to_rfc3339();
        let id = self.db().generate_id(PREFIX_MEAL).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO meals ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, 0, 0, 0, ?6, ?7)"
                ),
                libsql::params![
                    id.as_str(),
                    name,
                    cuisine,
                    price,
                    difficulty.as_str(),
                    now.as_str(),
                    now.as_str()
                ],
            )
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DatabaseError::Conflict {
                        name: name.to_string(),
                    }
                } else {
                    e.into()
                }
            })?;

        tracing::info!(id, name, cuisine, price, %difficulty, "meal created");
        Ok(id)
    }

    /// Fetch a live meal by ID.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` if absent, `DatabaseError::AlreadyDeleted`
    /// if soft-deleted.
    pub async fn get_by_id(&self, id: &str) -> Result<Meal, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM meals WHERE id = ?1"), [id])
            .await?;
        let meal = match rows.next().await? {
            Some(row) => Some(row_to_meal(&row)?),
            None => None,
        };

        ensure_live(id, meal.as_ref().map(|m| m.deleted), || {
            DatabaseError::not_found_id(id)
        })?;
        meal.ok_or(DatabaseError::NoResult)
    }

    /// Fetch a live meal by display name.
    ///
    /// When a live row and deleted rows share the name, the live row wins.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` if no row has this name,
    /// `DatabaseError::AlreadyDeleted` if only deleted rows do.
    pub async fn get_by_name(&self, name: &str) -> Result<Meal, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM meals WHERE name = ?1
                     ORDER BY deleted ASC, updated_at DESC LIMIT 1"
                ),
                [name],
            )
            .await?;
        let Some(row) = rows.next().await? else {
            tracing::info!(name, "meal not found");
            return Err(DatabaseError::not_found_name(name));
        };
        let meal = row_to_meal(&row)?;

        ensure_live(&meal.id, Some(meal.deleted), || {
            DatabaseError::not_found_name(name)
        })?;
        Ok(meal)
    }

    /// Soft-delete a meal. Counters and the row itself are kept.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` if absent, `DatabaseError::AlreadyDeleted`
    /// if already soft-deleted (on every repeated call).
    pub async fn delete(&self, id: &str) -> Result<(), DatabaseError> {
        let conn = self.db().conn();
        if let Err(e) = ensure_live(id, deleted_flag(conn, id).await?, || {
            DatabaseError::not_found_id(id)
        }) {
            tracing::info!(id, "delete rejected: {e}");
            return Err(e);
        }

        conn.execute(
            "UPDATE meals SET deleted = 1, updated_at = ?1 WHERE id = ?2",
            libsql::params![Utc::now().to_rfc3339(), id],
        )
        .await?;

        tracing::info!(id, "meal marked as deleted");
        Ok(())
    }

    /// Record one battle result: `battles += 1`, and `wins += 1` on a win.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` / `DatabaseError::AlreadyDeleted` under the
    /// same conditions as [`Self::get_by_id`].
    pub async fn record_result(&self, id: &str, outcome: BattleResult) -> Result<(), DatabaseError> {
        apply_result(self.db().conn(), id, outcome).await
    }

    /// Record both sides of one battle in a single transaction.
    ///
    /// Either both meals get their counters bumped or neither does.
    ///
    /// # Errors
    ///
    /// Same as [`Self::record_result`] for either meal; the transaction is
    /// rolled back before the error is returned.
    pub async fn record_battle(&self, winner_id: &str, loser_id: &str) -> Result<(), DatabaseError> {
        let tx = self.db().conn().transaction().await?;

        let applied = match apply_result(&tx, winner_id, BattleResult::Win).await {
            Ok(()) => apply_result(&tx, loser_id, BattleResult::Loss).await,
            Err(e) => Err(e),
        };

        match applied {
            Ok(()) => {
                tx.commit().await?;
                tracing::info!(winner_id, loser_id, "battle recorded");
                Ok(())
            }
            Err(e) => {
                tx.rollback().await?;
                tracing::warn!(winner_id, loser_id, "battle not recorded: {e}");
                Err(e)
            }
        }
    }

    /// All meals ordered by name. Deleted meals are included only on request.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query or row parsing fails.
    pub async fn list(&self, include_deleted: bool) -> Result<Vec<Meal>, DatabaseError> {
        let filter = if include_deleted { "" } else { "WHERE deleted = 0" };
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM meals {filter} ORDER BY name, deleted"),
                (),
            )
            .await?;

        let mut meals = Vec::new();
        while let Some(row) = rows.next().await? {
            meals.push(row_to_meal(&row)?);
        }
        Ok(meals)
    }

    /// Remove every meal row. Administrative reset, never used by battles.
    ///
    /// Returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails.
    pub async fn clear_all(&self) -> Result<u64, DatabaseError> {
        let removed = self.db().conn().execute("DELETE FROM meals", ()).await?;
        tracing::info!(removed, "meals cleared");
        Ok(removed)
    }

    /// Check that the connection answers and the schema is in place.
    ///
    /// Returns the number of live meals.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the `meals` table cannot be queried.
    pub async fn health_check(&self) -> Result<u64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM meals WHERE deleted = 0", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|e| DatabaseError::Other(e.into()))
    }

    /// ID of the live meal named `name`, if any.
    async fn live_id_by_name(&self, name: &str) -> Result<Option<String>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id FROM meals WHERE name = ?1 AND deleted = 0 LIMIT 1",
                [name],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row.get::<String>(0)?)),
            None => Ok(None),
        }
    }
}
