//! Persistence of the address book as JSON.

pub mod json_adapted;
mod json_storage;
mod traits;

pub use json_adapted::{
    JsonAdaptedCca, JsonAdaptedPerson, JsonAdaptedReminder, JsonAdaptedTag,
    JsonSerializableAddressBook,
};
pub use json_storage::JsonAddressBookStorage;
pub use traits::AddressBookStorage;
