//! Leaderboard queries over live meals that have fought at least once.

use meal_core::entities::LeaderboardEntry;
use meal_core::enums::LeaderboardSort;

use crate::error::DatabaseError;
use crate::helpers::{get_count, parse_enum};
use crate::store::MealStore;

const SELECT_COLS: &str = "id, name, cuisine, price, difficulty, battles, wins";

/// ORDER BY clause for a sort key. Ties fall back to name for stable output.
const fn order_clause(sort: LeaderboardSort) -> &'static str {
    match sort {
        LeaderboardSort::Wins => "ORDER BY wins DESC, name ASC",
        LeaderboardSort::WinPct => "ORDER BY (wins * 1.0 / battles) DESC, name ASC",
    }
}

fn row_to_entry(row: &libsql::Row) -> Result<LeaderboardEntry, DatabaseError> {
    let battles = get_count(row, 5)?;
    let wins = get_count(row, 6)?;
    Ok(LeaderboardEntry {
        id: row.get(0)?,
        name: row.get(1)?,
        cuisine: row.get(2)?,
        price: row.get::<f64>(3)?,
        difficulty: parse_enum(&row.get::<String>(4)?)?,
        battles,
        wins,
        win_pct: LeaderboardEntry::win_pct_of(wins, battles),
    })
}

impl MealStore {
    /// Leaderboard keyed by user-supplied text (`"wins"` or `"win_pct"`).
    ///
    /// # Errors
    ///
    /// `DatabaseError::InvalidSortKey` for any other key, otherwise as
    /// [`Self::leaderboard_sorted`].
    pub async fn leaderboard(&self, sort_by: &str) -> Result<Vec<LeaderboardEntry>, DatabaseError> {
        let sort = sort_by.parse::<LeaderboardSort>().map_err(|e| {
            tracing::error!(sort_by, "invalid leaderboard sort key");
            DatabaseError::from(e)
        })?;
        self.leaderboard_sorted(sort).await
    }

    /// Live meals with `battles > 0`, descending by `sort`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query or row parsing fails.
    pub async fn leaderboard_sorted(
        &self,
        sort: LeaderboardSort,
    ) -> Result<Vec<LeaderboardEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM meals WHERE deleted = 0 AND battles > 0 {}",
                    order_clause(sort)
                ),
                (),
            )
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }
        tracing::debug!(%sort, count = entries.len(), "leaderboard fetched");
        Ok(entries)
    }
}
