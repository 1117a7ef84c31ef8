//! Database queries for listing transactions.

use rusqlite::Connection;

use crate::Error;

use super::{
    core::{Transaction, map_transaction_row},
    range::DateRange,
};

/// Get every transaction in the database.
///
/// Transactions are returned in the order they were inserted (ascending ID).
/// An empty database gives an empty vector.
///
/// # Errors
/// Returns [Error::SqlError] if the query cannot be prepared or executed, or
/// if a row cannot be mapped to a [Transaction].
pub fn list_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, date, description, amount, category FROM transactions \
            ORDER BY id ASC",
        )?
        .query_map([], map_transaction_row)?
        .map(|transaction_result| transaction_result.map_err(Error::SqlError))
        .collect()
}

/// Get the transactions dated within `date_range`, including both end dates.
///
/// Transactions are returned in the order they were inserted (ascending ID),
/// not sorted by date. Dates are stored as zero-padded ISO 8601 text, so the
/// text comparison done by SQLite agrees with the calendar. A range whose
/// start is after its end matches nothing.
///
/// # Errors
/// Returns [Error::SqlError] if the query cannot be prepared or executed, or
/// if a row cannot be mapped to a [Transaction].
pub fn list_transactions_in_range(
    date_range: DateRange,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    tracing::debug!(
        "listing transactions from {} to {}",
        date_range.start,
        date_range.end
    );

    connection
        .prepare(
            "SELECT id, date, description, amount, category FROM transactions \
            WHERE date BETWEEN ?1 AND ?2 \
            ORDER BY id ASC",
        )?
        .query_map((date_range.start, date_range.end), map_transaction_row)?
        .map(|transaction_result| transaction_result.map_err(Error::SqlError))
        .collect()
}
