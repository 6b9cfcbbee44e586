//! ID prefixes for store-generated identifiers.
//!
//! IDs have the shape `{prefix}-{8 hex chars}`, e.g. `mel-a3f8b2c1`.

/// Prefix for meal IDs.
pub const PREFIX_MEAL: &str = "mel";

/// Every prefix the store may generate.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_MEAL];
