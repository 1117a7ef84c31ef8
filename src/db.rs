/*! Sets up the application's database schema. */

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, transaction::create_transaction_table};

/// Create the tables for the domain models if they do not already exist.
///
/// The tables are created inside a single exclusive SQL transaction, so either
/// the whole schema is created or nothing is. Calling this on a database that
/// already has the schema is a no-op.
///
/// # Errors
/// Returns an [Error::SqlError] if the database cannot be written to.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    tracing::debug!("database schema is ready");

    Ok(())
}
