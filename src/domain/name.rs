//! Name-family value objects: `Name`, `CcaName` and `ReminderName`.
//!
//! All three share one validation rule but are distinct nominal types, so a
//! CCA name can never be passed where a person's name is expected.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Constraint message shared by every name-family type.
pub const NAME_MESSAGE_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";

// The first character must not be a space, otherwise " " would be valid.
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("Failed to compile name regex")
});

/// Returns true if `name` satisfies the shared name rule.
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// A string value validated by the shared name rule.
///
/// Implementors only supply construction from an already validated string;
/// validation lives in [`NamedValue::new`] so it cannot diverge per type.
pub trait NamedValue: Sized {
    /// Wrap a string that already passed [`is_valid_name`].
    fn from_validated(name: String) -> Self;

    /// Get the name as a string slice.
    fn as_str(&self) -> &str;

    /// Create a new value, validating the shared name rule.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is invalid.
    fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(ValidationError::InvalidName);
        }
        Ok(Self::from_validated(name))
    }
}

macro_rules! named_value {
    ($(#[$meta:meta])* $ty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $ty(String);

        impl NamedValue for $ty {
            fn from_validated(name: String) -> Self {
                Self(name)
            }

            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

named_value!(
    /// A person's name.
    ///
    /// # Example
    ///
    /// ```
    /// use cca_manager::domain::{Name, NamedValue};
    ///
    /// let name = Name::new("Alex Yeoh").unwrap();
    /// assert_eq!(name.as_str(), "Alex Yeoh");
    /// ```
    Name
);

named_value!(
    /// The name of a co-curricular activity.
    CcaName
);

named_value!(
    /// The title of a reminder.
    ReminderName
);
