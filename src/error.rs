//! Error types for the CCA manager.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every error here is recoverable: the REPL prints it and asks for the next command.

use crate::domain::ValidationError;
use thiserror::Error;

/// Message for an index token that is not a positive integer.
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// Errors raised while turning user input into commands and value objects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Index token is not a non-zero unsigned integer
    #[error("{}", MESSAGE_INVALID_INDEX)]
    InvalidIndex,

    /// A field failed its format check; carries the field's constraint message
    #[error("{0}")]
    InvalidFormat(&'static str),

    /// A date passed the format check but is not a real calendar date
    #[error("{0}")]
    UnparsableDate(&'static str),

    /// A numeric identifier could not be read as a number
    #[error("Please input {field} as a number")]
    NotANumber { field: &'static str },

    /// Arguments do not fit the command's usage
    #[error("Invalid command format! \n{usage}")]
    InvalidCommandFormat { usage: &'static str },

    /// The command word is not recognised
    #[error("Unknown command")]
    UnknownCommand,
}

impl From<ValidationError> for ParseError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::UnparsableDate => Self::UnparsableDate(err.message()),
            other => Self::InvalidFormat(other.message()),
        }
    }
}

/// Errors raised while executing a command against the model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Displayed index is past the end of the list
    #[error("The {kind} index provided is invalid")]
    InvalidIndex { kind: &'static str },

    /// The entity already exists
    #[error("This {kind} already exists in the address book")]
    Duplicate { kind: &'static str },

    /// The person is already enrolled in the CCA
    #[error("{person} is already enrolled in {cca}")]
    AlreadyEnrolled { person: String, cca: String },
}

/// Errors raised when a stored record cannot become a model entity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalValueError {
    /// Required field absent from the record
    #[error("{entity}'s {field} field is missing!")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// Field present but fails domain validation
    #[error("{0}")]
    InvalidValue(&'static str),

    /// The stored list contains the same entity twice
    #[error("{0}")]
    Duplicate(&'static str),

    /// A person is enrolled in a CCA missing from the CCA list
    #[error("{person} is enrolled in {cca}, which is not in the CCAs list")]
    UnknownCca { person: String, cca: String },
}

impl From<ValidationError> for IllegalValueError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidValue(err.message())
    }
}

/// Errors that can occur while reading or writing the data file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// File system failure
    #[error("Could not access data file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse or write JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File parsed but its content is not a valid address book
    #[error("Illegal values found in data file: {0}")]
    IllegalValue(#[from] IllegalValueError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Any failure while handling one line of user input.
#[derive(Error, Debug)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The command ran but its change could not be written to the data file
    #[error("{feedback}\nThis change is not saved yet: {source}")]
    Unsaved {
        feedback: String,
        #[source]
        source: StorageError,
    },
}

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with CommandError
pub type ExecutionResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
