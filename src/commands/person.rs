//! Commands acting on persons.

use crate::domain::{Address, Email, Index, Name, Phone, Tag};
use crate::error::{CommandError, ExecutionResult};
use crate::models::address_book::PERSON;
use crate::models::{Model, NameContainsKeywordsPredicate, Person};
use crate::commands::CommandResult;
use std::collections::BTreeSet;
use tracing::info;

pub const PERSON_ADD_USAGE: &str = "person add: Adds a person to the address book. \
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...\n\
Example: person add n/John Doe p/98765432 e/johnd@example.com \
a/311, Clementi Ave 2, #02-25 t/friends t/owesMoney";

pub const PERSON_EDIT_USAGE: &str = "person edit: Edits the details of the person identified \
by the index number used in the displayed person list. Existing values will be overwritten by \
the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...\n\
Example: person edit 1 p/91234567 e/johndoe@example.com";

pub const PERSON_DELETE_USAGE: &str = "person delete: Deletes the person identified by the \
index number used in the displayed person list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: person delete 1";

pub const PERSON_FIND_USAGE: &str = "person find: Finds all persons whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: person find alice bob charlie";

pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

/// Adds a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonAddCommand {
    pub person: Person,
}

impl PersonAddCommand {
    pub fn execute(&self, model: &mut Model) -> ExecutionResult<CommandResult> {
        model.address_book_mut().add_person(self.person.clone())?;
        info!(name = %self.person.name(), "Added person");
        Ok(CommandResult::new(format!("New person added: {}", self.person)))
    }
}

/// Fields to overwrite when editing a person. `None` keeps the old value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// Apply the edits to `person`. CCA enrolment is kept.
    pub fn apply(&self, person: &Person) -> Person {
        Person::new(
            self.name.clone().unwrap_or_else(|| person.name().clone()),
            self.phone.clone().unwrap_or_else(|| person.phone().clone()),
            self.email.clone().unwrap_or_else(|| person.email().clone()),
            self.address.clone().unwrap_or_else(|| person.address().clone()),
            self.tags.clone().unwrap_or_else(|| person.tags().clone()),
        )
        .with_ccas(person.ccas().clone())
    }
}

/// Edits the displayed person at `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonEditCommand {
    pub index: Index,
    pub descriptor: EditPersonDescriptor,
}

impl PersonEditCommand {
    pub fn execute(&self, model: &mut Model) -> ExecutionResult<CommandResult> {
        let target = model.person_at(self.index)?.clone();
        let edited = self.descriptor.apply(&target);
        model.address_book_mut().set_person(&target, edited.clone())?;
        model.update_person_filter(None);
        info!(index = %self.index, "Edited person");
        Ok(CommandResult::new(format!("Edited Person: {}", edited)))
    }
}

/// Deletes the displayed person at `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDeleteCommand {
    pub index: Index,
}

impl PersonDeleteCommand {
    pub fn execute(&self, model: &mut Model) -> ExecutionResult<CommandResult> {
        let target = model.person_at(self.index)?.clone();
        if !model.address_book_mut().remove_person(&target) {
            return Err(CommandError::InvalidIndex { kind: PERSON });
        }
        info!(index = %self.index, "Deleted person");
        Ok(CommandResult::new(format!("Deleted Person: {}", target)))
    }
}

/// Narrows the displayed person list to names matching any keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonFindCommand {
    pub predicate: NameContainsKeywordsPredicate,
}

impl PersonFindCommand {
    pub fn new(predicate: NameContainsKeywordsPredicate) -> Self {
        Self { predicate }
    }

    pub fn execute(&self, model: &mut Model) -> ExecutionResult<CommandResult> {
        model.update_person_filter(Some(self.predicate.clone()));
        let persons = model.filtered_persons();
        Ok(CommandResult::new(format!(
            "{} persons listed!\n{}",
            persons.len(),
            numbered(&persons)
        )))
    }
}

/// Shows every person.
pub fn list_persons(model: &mut Model) -> CommandResult {
    model.update_person_filter(None);
    let persons = model.filtered_persons();
    if persons.is_empty() {
        return CommandResult::new("No persons in the address book");
    }
    CommandResult::new(format!("Listed all persons\n{}", numbered(&persons)))
}

fn numbered(persons: &[&Person]) -> String {
    persons
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. {}", i + 1, p))
        .collect::<Vec<_>>()
        .join("\n")
}
