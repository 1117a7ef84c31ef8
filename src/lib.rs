//! fintrack is a small tool for recording and browsing personal financial
//! transactions.
//!
//! Transactions (a date, a description, an amount and a category) are kept in
//! a local SQLite database. The library exposes a [Store] that owns the
//! database connection, plus the validation that turns raw user input into a
//! [NewTransaction] before anything touches the database. The `fintrack`
//! binary is a thin command-line shell over this library.

#![warn(missing_docs)]

mod database_id;
mod db;
pub mod logging;
mod store;
mod transaction;

pub use database_id::{DatabaseId, TransactionId};
pub use store::Store;
pub use transaction::{
    DateRange, Field, NewTransaction, Transaction, TransactionForm, TransactionTable,
    format_currency, parse_date,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required field was empty.
    ///
    /// The user should be asked to fill in the field and try again.
    #[error("{0} is required")]
    MissingField(Field),

    /// The amount could not be parsed as a finite real number.
    ///
    /// Holds the text that was given for the amount.
    #[error("amount must be a number, got \"{0}\"")]
    InvalidAmount(String),

    /// The text could not be parsed as an ISO 8601 calendar date (YYYY-MM-DD).
    #[error("\"{0}\" is not a valid date, expected the format YYYY-MM-DD")]
    InvalidDate(String),

    /// An unhandled/unexpected SQL error, e.g. the database file could not be
    /// opened or a write could not be committed.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl Error {
    /// Whether the error was caused by invalid user input rather than the
    /// database.
    ///
    /// Validation errors are raised before the database is touched, so the
    /// caller can safely re-prompt the user.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Error::MissingField(_) | Error::InvalidAmount(_) | Error::InvalidDate(_)
        )
    }
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", error);
        Error::SqlError(error)
    }
}
