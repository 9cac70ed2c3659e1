//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of persons, CCAs
//! and reminders. Every wrapper validates at construction time, so an invalid
//! value can never be represented in the model.

pub mod address;
pub mod email;
pub mod errors;
pub mod ids;
pub mod index;
pub mod name;
pub mod phone;
pub mod reminder_date;
pub mod tag;

pub use address::Address;
pub use email::Email;
pub use errors::ValidationError;
pub use ids::{Cid, Pid};
pub use index::{is_non_zero_unsigned_integer, Index};
pub use name::{is_valid_name, CcaName, Name, NamedValue, ReminderName, NAME_MESSAGE_CONSTRAINTS};
pub use phone::Phone;
pub use reminder_date::ReminderStartDate;
pub use tag::Tag;
