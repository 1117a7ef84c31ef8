//! Database ID type definitions.

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseId = i64;

/// The ID SQLite assigns to a transaction row on insert.
pub type TransactionId = DatabaseId;
