//! Row-to-entity parsing helpers and the shared liveness check.
//!
//! Repos convert `libsql::Row` (column-indexed) into typed structs through
//! these helpers. They also handle the dual datetime format issue
//! (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`).

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a non-negative INTEGER counter column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the stored value does not fit in `u32`.
pub fn get_count(row: &libsql::Row, idx: i32) -> Result<u32, DatabaseError> {
    let raw = row.get::<i64>(idx)?;
    u32::try_from(raw)
        .map_err(|_| DatabaseError::Query(format!("Counter in column {idx} out of range: {raw}")))
}

/// Read an INTEGER 0/1 column as `bool`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_flag(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}

/// The single liveness rule shared by lookup, stats updates, and deletion.
///
/// `row` is the `deleted` flag of the matching row, or `None` when nothing
/// matched. `missing` builds the error for the absent case so callers keep
/// their lookup key (ID or name) in the message.
///
/// # Errors
///
/// Returns the `missing` error when no row matched and
/// `DatabaseError::AlreadyDeleted` when the row is soft-deleted.
pub fn ensure_live(
    id: &str,
    deleted: Option<bool>,
    missing: impl FnOnce() -> DatabaseError,
) -> Result<(), DatabaseError> {
    match deleted {
        None => Err(missing()),
        Some(true) => Err(DatabaseError::AlreadyDeleted { id: id.to_string() }),
        Some(false) => Ok(()),
    }
}

/// Detect a UNIQUE constraint violation reported by `SQLite`.
pub fn is_unique_violation(e: &libsql::Error) -> bool {
    e.to_string().contains("UNIQUE constraint failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use meal_core::enums::Difficulty;

    #[test]
    fn parses_both_datetime_formats() {
        let a = parse_datetime("2026-02-09T14:30:00+00:00").unwrap();
        let b = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }

    #[test]
    fn parse_enum_reads_stored_difficulty() {
        let d: Difficulty = parse_enum("HIGH").unwrap();
        assert_eq!(d, Difficulty::High);
        assert!(parse_enum::<Difficulty>("HARD").is_err());
    }

    #[test]
    fn ensure_live_covers_all_states() {
        assert!(ensure_live("mel-1", Some(false), || DatabaseError::not_found_id("mel-1")).is_ok());
        assert!(matches!(
            ensure_live("mel-1", Some(true), || DatabaseError::not_found_id("mel-1")),
            Err(DatabaseError::AlreadyDeleted { .. })
        ));
        assert!(matches!(
            ensure_live("mel-1", None, || DatabaseError::not_found_id("mel-1")),
            Err(DatabaseError::NotFound { .. })
        ));
    }
}
