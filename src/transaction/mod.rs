//! Transactions: the data model, input validation, storage queries and the
//! text table used to display them.

mod core;
mod form;
mod query;
mod range;
mod view;

pub use self::core::{
    NewTransaction, Transaction, count_transactions, create_transaction,
    create_transaction_table,
};
pub use form::{Field, TransactionForm};
pub use query::{list_transactions, list_transactions_in_range};
pub use range::{DateRange, parse_date};
pub use view::{TransactionTable, format_currency};
