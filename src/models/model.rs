//! In-memory model: the address book plus the current person filter.

use crate::domain::Index;
use crate::error::{CommandError, ExecutionResult};
use crate::models::address_book::{CCA, PERSON, REMINDER};
use crate::models::{AddressBook, Cca, NameContainsKeywordsPredicate, Person, Reminder};
use tracing::debug;

/// The address book as seen by commands.
///
/// Person indices typed by the user refer to the *displayed* person list,
/// which is narrowed by `person find` and reset by `person list`.
#[derive(Debug, Clone, Default)]
pub struct Model {
    address_book: AddressBook,
    person_filter: Option<NameContainsKeywordsPredicate>,
}

impl Model {
    pub fn new(address_book: AddressBook) -> Self {
        Self {
            address_book,
            person_filter: None,
        }
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    pub fn address_book_mut(&mut self) -> &mut AddressBook {
        &mut self.address_book
    }

    /// Persons currently displayed, in address book order.
    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.address_book
            .persons()
            .iter()
            .filter(|p| self.person_filter.as_ref().map_or(true, |f| f.test(p)))
            .collect()
    }

    pub fn update_person_filter(&mut self, filter: Option<NameContainsKeywordsPredicate>) {
        debug!(?filter, "Updating person filter");
        self.person_filter = filter;
    }

    /// The displayed person at `index`.
    pub fn person_at(&self, index: Index) -> ExecutionResult<&Person> {
        self.filtered_persons()
            .get(index.zero_based())
            .copied()
            .ok_or(CommandError::InvalidIndex { kind: PERSON })
    }

    pub fn cca_at(&self, index: Index) -> ExecutionResult<&Cca> {
        self.address_book
            .ccas()
            .get(index.zero_based())
            .ok_or(CommandError::InvalidIndex { kind: CCA })
    }

    pub fn reminder_at(&self, index: Index) -> ExecutionResult<&Reminder> {
        self.address_book
            .reminders()
            .get(index.zero_based())
            .ok_or(CommandError::InvalidIndex { kind: REMINDER })
    }
}
