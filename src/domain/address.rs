//! Address value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// The first character must not be whitespace, otherwise " " would be valid.
static ADDRESS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^ \t\n\x0B\x0C\r].*$").expect("Failed to compile address regex"));

/// A person's address. Any non-blank text is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    /// Create a new Address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAddress` if the address is blank.
    pub fn new(address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into();
        if !Self::is_valid(&address) {
            return Err(ValidationError::InvalidAddress);
        }
        Ok(Self(address))
    }

    /// Returns true if `address` is a valid address.
    pub fn is_valid(address: &str) -> bool {
        ADDRESS_REGEX.is_match(address)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
