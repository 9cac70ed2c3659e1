//! CCA Manager - a terminal address book for persons, CCAs (co-curricular
//! activities) and reminders, persisted as JSON.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phone, email, dates, ids)
//! - **parser**: Field parsing utilities and command parsers
//! - **commands**: Executable commands and their results
//! - **models**: Entities and the in-memory address book
//! - **storage**: JSON record shapes and the file-backed storage
//! - **logic**: Parse → execute → save pipeline used by the REPL
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod logic;
pub mod models;
pub mod parser;
pub mod storage;

pub use commands::{Command, CommandResult};
pub use config::Config;
pub use error::{CommandError, ConfigError, IllegalValueError, LogicError, ParseError, StorageError};
pub use logic::LogicManager;
pub use models::{AddressBook, Cca, Model, Person, Reminder};
pub use parser::AddressBookParser;
pub use storage::{AddressBookStorage, JsonAddressBookStorage};
