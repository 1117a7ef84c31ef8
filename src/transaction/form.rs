//! Validation of user input for creating transactions.

use std::fmt::Display;

use crate::Error;

use super::{core::NewTransaction, range::parse_date};

/// A field of the form used to create a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// When the transaction happened.
    Date,
    /// What the transaction was for.
    Description,
    /// How much money was involved.
    Amount,
    /// The label used to group the transaction.
    Category,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Date => "date",
            Field::Description => "description",
            Field::Amount => "amount",
            Field::Category => "category",
        };

        write!(f, "{name}")
    }
}

/// The raw, unvalidated text a user entered to create a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    /// The date as an ISO 8601 string, e.g. "2024-03-01".
    pub date: String,
    /// Text detailing the transaction.
    pub description: String,
    /// The amount as a decimal string, e.g. "-54.32".
    pub amount: String,
    /// The category label, e.g. "Food".
    pub category: String,
}

impl TransactionForm {
    /// Check the form and convert it into a [NewTransaction] ready to be stored.
    ///
    /// Every field must be non-empty. The description and category are kept
    /// exactly as typed, surrounding whitespace is only ignored when parsing
    /// the date and amount.
    /// The amount may be any finite number, negative amounts included. The
    /// date is not checked against today, so future and past dates are fine.
    ///
    /// # Errors
    /// This function will return:
    /// - [Error::MissingField] for the first empty field, checked in the order
    ///   date, description, amount, category,
    /// - [Error::InvalidAmount] if the amount is not a finite number,
    /// - or [Error::InvalidDate] if the date is not a valid YYYY-MM-DD date.
    pub fn validate(&self) -> Result<NewTransaction, Error> {
        let date = required(&self.date, Field::Date)?;
        let description = required(&self.description, Field::Description)?;
        let amount = required(&self.amount, Field::Amount)?;
        let category = required(&self.category, Field::Category)?;

        let amount = parse_amount(amount)?;
        let date = parse_date(date)?;

        Ok(NewTransaction {
            date,
            description: description.to_owned(),
            amount,
            category: category.to_owned(),
        })
    }
}

fn required(text: &str, field: Field) -> Result<&str, Error> {
    if text.is_empty() {
        Err(Error::MissingField(field))
    } else {
        Ok(text)
    }
}

fn parse_amount(text: &str) -> Result<f64, Error> {
    match text.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(Error::InvalidAmount(text.to_owned())),
    }
}
