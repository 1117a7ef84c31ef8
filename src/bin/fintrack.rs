use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use time::{Date, OffsetDateTime};

use fintrack::{
    DateRange, Error, Store, Transaction, TransactionForm, TransactionTable,
    logging::setup_logging,
};

/// Record and browse personal financial transactions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long, default_value = "finance.db")]
    db_path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a transaction and show all transactions.
    Add {
        /// What the transaction was for.
        #[arg(short = 'D', long)]
        description: String,

        /// The amount, e.g. 54.32 or -1200. Any sign is allowed.
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,

        /// A label for grouping transactions, e.g. "Food".
        #[arg(short, long)]
        category: String,

        /// When the transaction happened (YYYY-MM-DD), defaults to today.
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show all transactions.
    List,

    /// Show the transactions between two dates, including both dates.
    Range {
        /// The first date to include (YYYY-MM-DD).
        start: String,

        /// The last date to include (YYYY-MM-DD).
        end: String,
    },
}

fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if !error.is_validation_error() {
                tracing::error!("command failed: {error}");
            }
            print_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Error> {
    let store = Store::open(&args.db_path)?;

    match args.command {
        Command::Add {
            description,
            amount,
            category,
            date,
        } => {
            let form = TransactionForm {
                date: date.unwrap_or_else(|| today().to_string()),
                description,
                amount,
                category,
            };
            // Validate before touching the database.
            let new_transaction = form.validate()?;
            store.insert_transaction(&new_transaction)?;

            println!("Transaction added successfully.\n");
            print_table(&store.list_transactions()?);
        }
        Command::List => print_table(&store.list_transactions()?),
        Command::Range { start, end } => {
            let date_range = DateRange::parse(&start, &end)?;
            if date_range.is_empty() {
                tracing::warn!("the range {date_range} starts after it ends");
            }
            print_table(&store.list_transactions_in_range(date_range)?);
        }
    }

    store.close()
}

fn print_table(transactions: &[Transaction]) {
    print!("{}", TransactionTable::new(transactions));
}

/// Today's date in the local timezone, or in UTC if the local offset is unknown.
fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

fn print_error(error: impl ToString) {
    eprintln!(
        "\x1b[31;1m{}\x1b[0m",
        capitalise_first_char(&error.to_string())
    )
}

/// From https://crates.io/crates/capitalize
fn capitalise_first_char(string: &str) -> String {
    let mut chars = string.chars();
    let Some(first) = chars.next() else {
        return String::with_capacity(0);
    };
    first.to_uppercase().chain(chars).collect()
}
