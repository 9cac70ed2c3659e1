//! The address book: unique lists of persons, CCAs and reminders.

use crate::domain::CcaName;
use crate::error::{CommandError, ExecutionResult};
use crate::models::{Cca, Person, Reminder};

/// Entity kind labels used in error messages.
pub const PERSON: &str = "person";
pub const CCA: &str = "cca";
pub const REMINDER: &str = "reminder";

/// Holds every entity. Duplicates (by each entity's identity rule) are
/// rejected at insertion time.
///
/// Reminders are kept ordered by start date; persons and CCAs keep
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
    ccas: Vec<Cca>,
    reminders: Vec<Reminder>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn ccas(&self) -> &[Cca] {
        &self.ccas
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Remove every entity.
    pub fn clear(&mut self) {
        self.persons.clear();
        self.ccas.clear();
        self.reminders.clear();
    }

    // ---- persons ----

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add_person(&mut self, person: Person) -> ExecutionResult<()> {
        if self.has_person(&person) {
            return Err(CommandError::Duplicate { kind: PERSON });
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replace `target` with `edited`.
    ///
    /// Fails if `edited` would clash with a person other than `target`.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> ExecutionResult<()> {
        let position = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or(CommandError::InvalidIndex { kind: PERSON })?;
        let clashes = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != position && p.is_same_person(&edited));
        if clashes {
            return Err(CommandError::Duplicate { kind: PERSON });
        }
        self.persons[position] = edited;
        Ok(())
    }

    /// Remove `target`; returns false if it was not present.
    pub fn remove_person(&mut self, target: &Person) -> bool {
        let before = self.persons.len();
        self.persons.retain(|p| p != target);
        self.persons.len() != before
    }

    // ---- ccas ----

    pub fn has_cca(&self, cca: &Cca) -> bool {
        self.ccas.iter().any(|c| c.is_same_cca(cca))
    }

    pub fn add_cca(&mut self, cca: Cca) -> ExecutionResult<()> {
        if self.has_cca(&cca) {
            return Err(CommandError::Duplicate { kind: CCA });
        }
        self.ccas.push(cca);
        Ok(())
    }

    /// Remove `target` and withdraw every person from it.
    pub fn remove_cca(&mut self, target: &Cca) -> bool {
        let before = self.ccas.len();
        self.ccas.retain(|c| c != target);
        if self.ccas.len() == before {
            return false;
        }
        self.withdraw_all(target.name());
        true
    }

    fn withdraw_all(&mut self, cca: &CcaName) {
        for person in self.persons.iter_mut() {
            if person.is_enrolled_in(cca) {
                *person = person.withdrawn_from(cca);
            }
        }
    }

    // ---- reminders ----

    pub fn has_reminder(&self, reminder: &Reminder) -> bool {
        self.reminders.iter().any(|r| r.is_same_reminder(reminder))
    }

    /// Insert `reminder` after every reminder that starts on or before it.
    pub fn add_reminder(&mut self, reminder: Reminder) -> ExecutionResult<()> {
        if self.has_reminder(&reminder) {
            return Err(CommandError::Duplicate { kind: REMINDER });
        }
        let position = self
            .reminders
            .partition_point(|r| r.start_date() <= reminder.start_date());
        self.reminders.insert(position, reminder);
        Ok(())
    }

    pub fn remove_reminder(&mut self, target: &Reminder) -> bool {
        let before = self.reminders.len();
        self.reminders.retain(|r| r != target);
        self.reminders.len() != before
    }
}
