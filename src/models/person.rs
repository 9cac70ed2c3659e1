//! Person entity.

use crate::domain::{Address, CcaName, Email, Name, NamedValue, Phone, Tag};
use std::collections::BTreeSet;
use std::fmt;

/// A person in the address book.
///
/// Every field is a validated value object, so a `Person` is valid by
/// construction. Two persons are the *same person* when their names match,
/// even if other fields differ; full equality compares every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
    ccas: BTreeSet<CcaName>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
            ccas: BTreeSet::new(),
        }
    }

    /// Replace the CCAs this person is enrolled in.
    pub fn with_ccas(mut self, ccas: BTreeSet<CcaName>) -> Self {
        self.ccas = ccas;
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn ccas(&self) -> &BTreeSet<CcaName> {
        &self.ccas
    }

    /// Returns true if both persons have the same name.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }

    pub fn is_enrolled_in(&self, cca: &CcaName) -> bool {
        self.ccas.contains(cca)
    }

    /// A copy of this person with `cca` added to their CCAs.
    pub fn enrolled_in(&self, cca: CcaName) -> Self {
        let mut person = self.clone();
        person.ccas.insert(cca);
        person
    }

    /// A copy of this person without `cca`.
    pub fn withdrawn_from(&self, cca: &CcaName) -> Self {
        let mut person = self.clone();
        person.ccas.remove(cca);
        person
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        if !self.tags.is_empty() {
            write!(f, "; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{}", tag)?;
            }
        }
        if !self.ccas.is_empty() {
            let ccas: Vec<&str> = self.ccas.iter().map(|c| c.as_str()).collect();
            write!(f, "; CCAs: {}", ccas.join(", "))?;
        }
        Ok(())
    }
}
