use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;

use fintrack::{Store, TransactionForm, logging::setup_logging};

/// A utility for creating a test database for fintrack.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// (date, description, amount, category)
const SAMPLE_TRANSACTIONS: [(&str, &str, &str, &str); 8] = [
    ("2024-01-02", "Salary", "4250.00", "Income"),
    ("2024-01-03", "Rent", "-1200.00", "Housing"),
    ("2024-01-09", "Groceries", "-54.32", "Food"),
    ("2024-01-17", "Bus pass", "-45.00", "Transport"),
    ("2024-01-31", "Power bill", "-132.87", "Utilities"),
    ("2024-02-01", "Salary", "4250.00", "Income"),
    ("2024-02-03", "Rent", "-1200.00", "Housing"),
    ("2024-02-14", "Dinner out", "-86.50", "Food"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let store = Store::open(output_path)?;

    println!("Adding {} sample transactions...", SAMPLE_TRANSACTIONS.len());

    for (date, description, amount, category) in SAMPLE_TRANSACTIONS {
        let form = TransactionForm {
            date: date.to_owned(),
            description: description.to_owned(),
            amount: amount.to_owned(),
            category: category.to_owned(),
        };

        store.insert_transaction(&form.validate()?)?;
    }

    store.close()?;

    println!("Success!");

    Ok(())
}
