//! Email value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

const ALPHANUMERIC: &str = "[A-Za-z0-9]+";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let local_part = format!("{a}([+_.-]{a})*", a = ALPHANUMERIC);
    let domain_part = format!("{a}(-{a})*", a = ALPHANUMERIC);
    // The last label is at least two characters long.
    let domain = format!("({d}\\.)*({d}){{2,}}", d = domain_part);
    Regex::new(&format!("^{}@{}$", local_part, domain)).expect("Failed to compile email regex")
});

/// A person's email address.
///
/// # Example
///
/// ```
/// use cca_manager::domain::Email;
///
/// let email = Email::new("alexyeoh@example.com").unwrap();
/// assert_eq!(email.as_str(), "alexyeoh@example.com");
/// assert!(Email::new("alexyeoh@").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
and adhere to the following constraints:\n\
1. The local-part should only contain alphanumeric characters and these special characters, \
excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
separated by periods.\n\
The domain name must:\n    \
- end with a domain label at least 2 characters long\n    \
- have each domain label start and end with alphanumeric characters\n    \
- have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    /// Create a new Email, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self(email))
    }

    /// Returns true if `email` is a valid email address.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
