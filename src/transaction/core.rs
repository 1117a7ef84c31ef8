//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row};
use time::Date;

use crate::{Error, database_id::TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are only ever created by the database, see [create_transaction].
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// A free-form label for grouping transactions, e.g. "Food" or "Housing".
    pub category: String,
}

/// A transaction that has been validated but not yet stored.
///
/// Use [crate::TransactionForm::validate] to create one from user input.
/// The database does not re-check these fields, so code that builds a
/// `NewTransaction` directly must ensure that the description and category are
/// not empty and that the amount is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The monetary amount of the transaction.
    ///
    /// No sign convention is enforced, both debits and credits may be
    /// recorded as positive or negative values.
    pub amount: f64,
    /// A free-form label for grouping transactions.
    pub category: String,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Insert a new transaction into the database.
///
/// The new row is committed immediately and returned with the ID that the
/// database assigned to it.
///
/// # Errors
/// This function will return an [Error::SqlError] if the row could not be
/// written, e.g. the disk is full or the database file is locked.
pub fn create_transaction(
    new_transaction: &NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO transactions (date, description, amount, category)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, date, description, amount, category",
        )?
        .query_row(
            (
                new_transaction.date,
                &new_transaction.description,
                new_transaction.amount,
                &new_transaction.category,
            ),
            map_transaction_row,
        )?;

    tracing::info!(
        "created transaction #{} dated {}",
        transaction.id,
        transaction.date
    );

    Ok(transaction)
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM transactions;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// `AUTOINCREMENT` guarantees that the ID of a row is never handed out again.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                description TEXT NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL
                )",
        (),
    )?;

    // Used by date range queries.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
///
/// Expects the columns in the order `id, date, description, amount, category`.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let date = row.get(1)?;
    let description = row.get(2)?;
    let amount = row.get(3)?;
    let category = row.get(4)?;

    Ok(Transaction {
        id,
        date,
        description,
        amount,
        category,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        db::initialize,
        transaction::{NewTransaction, count_transactions, create_transaction},
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn groceries() -> NewTransaction {
        NewTransaction {
            date: date!(2024 - 03 - 01),
            description: "Groceries".to_owned(),
            amount: 54.32,
            category: "Food".to_owned(),
        }
    }

    #[test]
    fn create_succeeds() {
        let conn = get_test_connection();
        let new_transaction = groceries();

        let result = create_transaction(&new_transaction, &conn);

        match result {
            Ok(transaction) => {
                assert!(transaction.id > 0);
                assert_eq!(transaction.date, new_transaction.date);
                assert_eq!(transaction.description, new_transaction.description);
                assert_eq!(transaction.amount, new_transaction.amount);
                assert_eq!(transaction.category, new_transaction.category);
            }
            Err(error) => panic!("Unexpected error: {error}"),
        }
    }

    #[test]
    fn create_accepts_negative_amounts() {
        let conn = get_test_connection();
        let new_transaction = NewTransaction {
            amount: -1200.0,
            ..groceries()
        };

        let transaction = create_transaction(&new_transaction, &conn).unwrap();

        assert_eq!(transaction.amount, -1200.0);
    }

    #[test]
    fn stores_date_as_iso_text() {
        let conn = get_test_connection();
        let transaction = create_transaction(&groceries(), &conn).unwrap();

        let stored: String = conn
            .query_row(
                "SELECT date FROM transactions WHERE id = ?1",
                [transaction.id],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(stored, "2024-03-01");
    }

    #[test]
    fn ids_are_not_reused() {
        let conn = get_test_connection();
        let first = create_transaction(&groceries(), &conn).unwrap();
        conn.execute("DELETE FROM transactions WHERE id = ?1", [first.id])
            .unwrap();

        let second = create_transaction(&groceries(), &conn).unwrap();

        assert!(
            second.id > first.id,
            "got ID {} after deleting ID {}, want a fresh ID",
            second.id,
            first.id
        );
    }

    #[test]
    fn get_count() {
        let conn = get_test_connection();
        let want_count = 20;
        for i in 1..=want_count {
            let new_transaction = NewTransaction {
                amount: i as f64,
                ..groceries()
            };
            create_transaction(&new_transaction, &conn).expect("Could not create transaction");
        }

        let got_count = count_transactions(&conn).expect("Could not get count");

        assert_eq!(want_count, got_count);
    }
}
