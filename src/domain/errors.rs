//! Domain validation errors.

use std::fmt;

use super::address::Address;
use super::email::Email;
use super::name::NAME_MESSAGE_CONSTRAINTS;
use super::phone::Phone;
use super::reminder_date::ReminderStartDate;
use super::tag::Tag;

/// Errors that can occur during domain value object validation.
///
/// Each variant renders as the fixed constraint message of the value type it
/// belongs to. The rejected input is never echoed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name, CCA name or reminder name failed the shared name rule.
    InvalidName,

    /// The phone number is not all digits or too short.
    InvalidPhone,

    /// The email address does not match `local-part@domain`.
    InvalidEmail,

    /// The address is blank.
    InvalidAddress,

    /// The tag name is not alphanumeric.
    InvalidTag,

    /// The date text does not look like `dd/MM/yyyy`.
    InvalidDateFormat,

    /// The date text looks right but is not a real calendar date.
    UnparsableDate,
}

impl ValidationError {
    /// The fixed constraint message for this failure.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidName => NAME_MESSAGE_CONSTRAINTS,
            Self::InvalidPhone => Phone::MESSAGE_CONSTRAINTS,
            Self::InvalidEmail => Email::MESSAGE_CONSTRAINTS,
            Self::InvalidAddress => Address::MESSAGE_CONSTRAINTS,
            Self::InvalidTag => Tag::MESSAGE_CONSTRAINTS,
            Self::InvalidDateFormat => ReminderStartDate::MESSAGE_CONSTRAINTS,
            Self::UnparsableDate => ReminderStartDate::PARSE_DATE_CONSTRAINTS,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}
