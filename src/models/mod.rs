//! Data models for persons, CCAs and reminders.
//!
//! Entities are composed from the validated value objects in [`crate::domain`].

pub mod address_book;
pub mod cca;
pub mod model;
pub mod person;
pub mod predicate;
pub mod reminder;

pub use address_book::AddressBook;
pub use cca::Cca;
pub use model::Model;
pub use person::Person;
pub use predicate::NameContainsKeywordsPredicate;
pub use reminder::Reminder;
