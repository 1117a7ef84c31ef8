//! Plain text rendering of transactions for the command line.

use std::{fmt::Display, sync::OnceLock};

use numfmt::{Formatter, Precision};

use super::core::Transaction;

const HEADERS: [&str; 4] = ["Date", "Description", "Amount", "Category"];

/// A table of transactions with the columns Date, Description, Amount and
/// Category, followed by a summary line.
///
/// Transaction IDs are not shown.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionTable {
    rows: Vec<[String; 4]>,
    total: f64,
}

impl TransactionTable {
    /// Build a table from `transactions`, keeping their order.
    pub fn new(transactions: &[Transaction]) -> Self {
        let rows = transactions
            .iter()
            .map(|transaction| {
                [
                    transaction.date.to_string(),
                    transaction.description.clone(),
                    format_currency(transaction.amount),
                    transaction.category.clone(),
                ]
            })
            .collect();
        let total = transactions
            .iter()
            .map(|transaction| transaction.amount)
            .sum();

        Self { rows, total }
    }

    fn column_widths(&self) -> [usize; 4] {
        let mut widths = HEADERS.map(|header| header.chars().count());

        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        widths
    }
}

impl Display for TransactionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No transactions found.");
        }

        let [date_w, description_w, amount_w, category_w] = self.column_widths();

        let header = format!(
            "{:<date_w$}  {:<description_w$}  {:>amount_w$}  {:<category_w$}",
            HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3]
        );
        writeln!(f, "{}", header.trim_end())?;
        writeln!(
            f,
            "{}  {}  {}  {}",
            "-".repeat(date_w),
            "-".repeat(description_w),
            "-".repeat(amount_w),
            "-".repeat(category_w)
        )?;

        for [date, description, amount, category] in &self.rows {
            let line = format!(
                "{date:<date_w$}  {description:<description_w$}  {amount:>amount_w$}  {category:<category_w$}"
            );
            writeln!(f, "{}", line.trim_end())?;
        }

        let noun = if self.rows.len() == 1 {
            "transaction"
        } else {
            "transactions"
        };

        writeln!(
            f,
            "\n{} {noun}, total {}",
            self.rows.len(),
            format_currency(self.total)
        )
    }
}

/// numfmt switches to exponent notation from here on, e.g. "$1.0e15".
const EXPONENT_THRESHOLD: f64 = 1e15;

/// Format `number` as dollars with a thousands separator and two decimal places,
/// e.g. "$1,234.50" or "-$54.32".
///
/// The amount is rounded to the nearest cent. Amounts that round to zero are
/// shown as "$0.00" whatever their sign.
pub fn format_currency(number: f64) -> String {
    let cents = (number.abs() * 100.0).round();

    if cents == 0.0 {
        return "$0.00".to_owned();
    }

    let sign = if number < 0.0 { "-" } else { "" };
    let dollars = (cents / 100.0).trunc();
    let remainder = cents - dollars * 100.0;

    format!("{sign}{}.{:02}", format_dollars(dollars), remainder as u8)
}

/// Format a whole number of dollars, e.g. "$1,200".
fn format_dollars(dollars: f64) -> String {
    static DOLLAR_FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    let dollar_fmt = DOLLAR_FMT.get_or_init(|| {
        Formatter::currency("$")
            .ok()
            .map(|fmt| fmt.precision(Precision::Decimals(0)))
    });

    match dollar_fmt {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        _ if dollars == 0.0 => "$0".to_owned(),
        Some(fmt) if dollars < EXPONENT_THRESHOLD => fmt.fmt_string(dollars),
        _ => format!("${}", group_thousands(&format!("{dollars:.0}"))),
    }
}

/// Insert a comma between every group of three digits, e.g. "1234567" to "1,234,567".
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
