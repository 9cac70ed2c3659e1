//! Tag value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("Failed to compile tag regex"));

/// A single alphanumeric tag attached to a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    /// Create a new Tag.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTag` if the tag name is not alphanumeric.
    pub fn new(tag_name: impl Into<String>) -> Result<Self, ValidationError> {
        let tag_name = tag_name.into();
        if !Self::is_valid(&tag_name) {
            return Err(ValidationError::InvalidTag);
        }
        Ok(Self(tag_name))
    }

    /// Returns true if `tag_name` is a valid tag name.
    pub fn is_valid(tag_name: &str) -> bool {
        TAG_REGEX.is_match(tag_name)
    }

    /// Get the tag name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
