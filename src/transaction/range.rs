//! Date parsing and inclusive date ranges for filtering transactions.

use std::fmt::Display;

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// The ISO 8601 calendar date format used for input and storage, e.g. "2024-03-01".
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse an ISO 8601 calendar date (YYYY-MM-DD).
///
/// Surrounding whitespace is ignored.
///
/// # Errors
/// Returns an [Error::InvalidDate] holding the original text if it is not a
/// real calendar date in the expected format, e.g. "2024-02-30" or "01/03/2024".
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), ISO_DATE).map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// An inclusive range of dates.
///
/// No ordering between `start` and `end` is enforced: a range whose start is
/// after its end is valid and simply contains no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// The first date in the range.
    pub start: Date,
    /// The last date in the range.
    pub end: Date,
}

impl DateRange {
    /// Create a range covering `start` through `end`.
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Create a range from two ISO 8601 date strings.
    ///
    /// # Errors
    /// Returns an [Error::InvalidDate] for the first bound that cannot be parsed.
    pub fn parse(start: &str, end: &str) -> Result<Self, Error> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    /// Whether the range contains no dates at all, i.e. it starts after it ends.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::Error;

    use super::{DateRange, parse_date};

    #[test]
    fn parses_iso_date() {
        assert_eq!(parse_date("2024-03-01"), Ok(date!(2024 - 03 - 01)));
    }

    #[test]
    fn parse_ignores_surrounding_whitespace() {
        assert_eq!(parse_date(" 2024-03-01\n"), Ok(date!(2024 - 03 - 01)));
    }

    #[test]
    fn parse_rejects_impossible_date() {
        assert_eq!(
            parse_date("2024-02-30"),
            Err(Error::InvalidDate("2024-02-30".to_owned()))
        );
    }

    #[test]
    fn parse_rejects_other_formats() {
        for text in ["01/03/2024", "2024-3-1", "20240301", "yesterday", ""] {
            assert_eq!(
                parse_date(text),
                Err(Error::InvalidDate(text.to_owned())),
                "want {text:?} to be rejected"
            );
        }
    }

    #[test]
    fn range_parse_reports_first_bad_bound() {
        let got = DateRange::parse("2024-01-01", "not a date");

        assert_eq!(got, Err(Error::InvalidDate("not a date".to_owned())));
    }

    #[test]
    fn range_parse_allows_reversed_bounds() {
        let range = DateRange::parse("2024-01-31", "2024-01-01").unwrap();

        assert!(range.is_empty());
    }

    #[test]
    fn single_day_range_is_not_empty() {
        let range = DateRange::new(date!(2024 - 01 - 01), date!(2024 - 01 - 01));

        assert!(!range.is_empty());
    }

    #[test]
    fn range_display() {
        let range = DateRange::new(date!(2024 - 03 - 01), date!(2024 - 03 - 10));

        assert_eq!(range.to_string(), "2024-03-01 to 2024-03-10");
    }
}
