//! Database error types for meal-db.

use meal_core::errors::CoreError;
use thiserror::Error;

/// Errors from meal store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Input rejected before touching the store.
    #[error("{0}")]
    Validation(String),

    /// A live meal already uses this name.
    #[error("Meal with name '{name}' already exists")]
    Conflict { name: String },

    /// No meal matches the lookup key.
    #[error("Meal with {key} not found")]
    NotFound { key: String },

    /// The meal exists but has been soft-deleted.
    #[error("Meal with ID {id} has been deleted")]
    AlreadyDeleted { id: String },

    /// Unsupported leaderboard key.
    #[error("Invalid sort_by parameter: {0}")]
    InvalidSortKey(String),

    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// `NotFound` keyed by meal ID.
    pub fn not_found_id(id: &str) -> Self {
        Self::NotFound {
            key: format!("ID {id}"),
        }
    }

    /// `NotFound` keyed by meal name.
    pub fn not_found_name(name: &str) -> Self {
        Self::NotFound {
            key: format!("name {name}"),
        }
    }
}

impl From<CoreError> for DatabaseError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::Validation(msg),
            CoreError::InvalidSortKey(key) => Self::InvalidSortKey(key),
            CoreError::Other(e) => Self::Other(e),
        }
    }
}
