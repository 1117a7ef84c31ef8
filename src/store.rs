//! The [Store] owns the database connection and exposes the transaction
//! operations.

use std::path::Path;

use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    transaction::{
        DateRange, NewTransaction, Transaction, count_transactions, create_transaction,
        list_transactions, list_transactions_in_range,
    },
};

/// Durable storage for transactions, backed by a single SQLite connection.
///
/// A `Store` is created once at startup and handed to whatever needs it.
/// Dropping the store closes the connection; use [Store::close] to find out
/// whether closing succeeded.
///
/// Every operation runs to completion before returning and commits on its
/// own, there are no multi-step SQL transactions. The store is not shared
/// between threads, wrap it in a `Mutex` if that is ever needed.
#[derive(Debug)]
pub struct Store {
    connection: Connection,
}

impl Store {
    /// Open the database at `path`, creating the file and schema if needed.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the file cannot be opened or the
    /// schema cannot be written.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        tracing::debug!("opening database at {}", path.display());

        Self::from_connection(Connection::open(path)?)
    }

    /// Open a fresh in-memory database, e.g. for tests.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the schema cannot be created.
    pub fn open_in_memory() -> Result<Self, Error> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Wrap an existing connection, creating the schema if needed.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the schema cannot be created.
    pub fn from_connection(connection: Connection) -> Result<Self, Error> {
        let store = Self { connection };
        store.ensure_schema()?;

        Ok(store)
    }

    /// Create the transactions table if it does not exist yet.
    ///
    /// Safe to call any number of times.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the database cannot be written to.
    pub fn ensure_schema(&self) -> Result<(), Error> {
        initialize(&self.connection)
    }

    /// Store a validated transaction and return it with its new ID.
    ///
    /// The fields are not checked again here, see [crate::TransactionForm::validate].
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the write cannot be committed. Nothing
    /// is written in that case.
    pub fn insert_transaction(
        &self,
        new_transaction: &NewTransaction,
    ) -> Result<Transaction, Error> {
        create_transaction(new_transaction, &self.connection)
    }

    /// Get all transactions in insertion order.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the query fails.
    pub fn list_transactions(&self) -> Result<Vec<Transaction>, Error> {
        list_transactions(&self.connection)
    }

    /// Get the transactions dated within `date_range` (both ends included), in
    /// insertion order.
    ///
    /// A range that starts after it ends gives an empty vector.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the query fails.
    pub fn list_transactions_in_range(
        &self,
        date_range: DateRange,
    ) -> Result<Vec<Transaction>, Error> {
        list_transactions_in_range(date_range, &self.connection)
    }

    /// Get the number of stored transactions.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the query fails.
    pub fn count_transactions(&self) -> Result<u32, Error> {
        count_transactions(&self.connection)
    }

    /// Close the database connection.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if SQLite could not close the connection,
    /// e.g. because a statement is still in use.
    pub fn close(self) -> Result<(), Error> {
        self.connection
            .close()
            .map_err(|(_connection, error)| Error::from(error))
    }
}
