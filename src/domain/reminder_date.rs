//! ReminderStartDate value object.
//!
//! Validation happens in two stages: a loose shape check on the text, then a
//! strict calendar parse. Text like `31/04/2024` passes the first stage and
//! fails the second, and each stage reports its own message.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// The `chrono` pattern used for both input and display.
pub const INPUT_DATE_FORMAT: &str = "%d/%m/%Y";

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}$").expect("Failed to compile date regex")
});

/// The date a reminder starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReminderStartDate(NaiveDate);

impl ReminderStartDate {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Start date should be in the format dd/MM/yyyy";

    pub const PARSE_DATE_CONSTRAINTS: &'static str =
        "Start date cannot be parsed, please check that it is a real calendar date";

    /// Parse a start date from `dd/MM/yyyy` text.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidDateFormat` if the text does not have the date shape
    /// - `ValidationError::UnparsableDate` if it has the shape but is not a real date
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        if !Self::is_valid(text) {
            return Err(ValidationError::InvalidDateFormat);
        }
        NaiveDate::parse_from_str(text, INPUT_DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::UnparsableDate)
    }

    /// Returns true if `text` has the `dd/MM/yyyy` shape.
    ///
    /// This does not check that the date exists on the calendar.
    pub fn is_valid(text: &str) -> bool {
        DATE_REGEX.is_match(text)
    }
}

impl fmt::Display for ReminderStartDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(INPUT_DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_shape() {
        assert!(ReminderStartDate::is_valid("01/02/2024"));
        assert!(ReminderStartDate::is_valid("1/2/2024"));
        assert!(ReminderStartDate::is_valid("31/04/2024"));
        assert!(!ReminderStartDate::is_valid("2024-02-01"));
        assert!(!ReminderStartDate::is_valid("01/02/24"));
        assert!(!ReminderStartDate::is_valid("١٢/٠٥/٢٠٢٤"));
        assert!(!ReminderStartDate::is_valid(""));
    }

    #[test]
    fn test_date_parse_stages() {
        assert_eq!(
            ReminderStartDate::parse("tomorrow").unwrap_err(),
            ValidationError::InvalidDateFormat
        );
        assert_eq!(
            ReminderStartDate::parse("١٢/٠٥/٢٠٢٤").unwrap_err(),
            ValidationError::InvalidDateFormat
        );
        assert_eq!(
            ReminderStartDate::parse("31/04/2024").unwrap_err(),
            ValidationError::UnparsableDate
        );
        assert_eq!(
            ReminderStartDate::parse("29/02/2023").unwrap_err(),
            ValidationError::UnparsableDate
        );
        assert_eq!(
            ReminderStartDate::parse("01/13/2024").unwrap_err(),
            ValidationError::UnparsableDate
        );
    }

    #[test]
    fn test_date_display_is_zero_padded() {
        let date = ReminderStartDate::parse("1/2/2024").unwrap();
        assert_eq!(date, ReminderStartDate::parse("01/02/2024").unwrap());
        assert_eq!(date.to_string(), "01/02/2024");
    }

    #[test]
    fn test_date_ordering() {
        let earlier = ReminderStartDate::parse("31/12/2023").unwrap();
        let later = ReminderStartDate::parse("01/01/2024").unwrap();
        assert!(earlier < later);
    }
}
