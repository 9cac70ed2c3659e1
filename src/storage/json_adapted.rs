//! JSON-friendly record shapes for the address book.
//!
//! Records hold raw strings. Converting a record into a model entity first
//! checks that every required field is present, then runs domain validation,
//! so a hand-edited data file reports the first problem it contains.

use crate::domain::{
    Address, CcaName, Email, Name, NamedValue, Phone, ReminderName, ReminderStartDate, Tag,
};
use crate::error::IllegalValueError;
use crate::models::{AddressBook, Cca, Person, Reminder};
use serde::{Deserialize, Serialize};

pub const MESSAGE_DUPLICATE_PERSON: &str = "Persons list contains duplicate person(s).";
pub const MESSAGE_DUPLICATE_CCA: &str = "CCAs list contains duplicate CCA(s).";
pub const MESSAGE_DUPLICATE_REMINDER: &str = "Reminders list contains duplicate reminder(s).";

/// Return the field or a `MissingField` error naming it.
fn require<'a>(
    value: &'a Option<String>,
    entity: &'static str,
    field: &'static str,
) -> Result<&'a str, IllegalValueError> {
    value
        .as_deref()
        .ok_or(IllegalValueError::MissingField { entity, field })
}

/// A tag stored as a bare string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct JsonAdaptedTag(pub String);

impl From<&Tag> for JsonAdaptedTag {
    fn from(tag: &Tag) -> Self {
        Self(tag.as_str().to_string())
    }
}

impl JsonAdaptedTag {
    pub fn to_model_type(&self) -> Result<Tag, IllegalValueError> {
        Ok(Tag::new(self.0.as_str())?)
    }
}

/// Stored form of a [`Person`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedPerson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default)]
    pub tags: Vec<JsonAdaptedTag>,

    /// Names of the CCAs the person is enrolled in
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ccas: Vec<String>,
}

impl JsonAdaptedPerson {
    pub const ENTITY: &'static str = "Person";

    /// Convert into a [`Person`].
    ///
    /// Every required field is checked for presence before any of them is
    /// validated.
    pub fn to_model_type(&self) -> Result<Person, IllegalValueError> {
        let name = require(&self.name, Self::ENTITY, "name")?;
        let phone = require(&self.phone, Self::ENTITY, "phone")?;
        let email = require(&self.email, Self::ENTITY, "email")?;
        let address = require(&self.address, Self::ENTITY, "address")?;

        let tags = self
            .tags
            .iter()
            .map(JsonAdaptedTag::to_model_type)
            .collect::<Result<_, _>>()?;
        let ccas = self
            .ccas
            .iter()
            .map(|cca| CcaName::new(cca.as_str()))
            .collect::<Result<_, _>>()?;

        Ok(Person::new(
            Name::new(name)?,
            Phone::new(phone)?,
            Email::new(email)?,
            Address::new(address)?,
            tags,
        )
        .with_ccas(ccas))
    }
}

impl From<&Person> for JsonAdaptedPerson {
    fn from(person: &Person) -> Self {
        Self {
            name: Some(person.name().as_str().to_string()),
            phone: Some(person.phone().as_str().to_string()),
            email: Some(person.email().as_str().to_string()),
            address: Some(person.address().as_str().to_string()),
            tags: person.tags().iter().map(JsonAdaptedTag::from).collect(),
            ccas: person.ccas().iter().map(|c| c.as_str().to_string()).collect(),
        }
    }
}

/// Stored form of a [`Cca`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct JsonAdaptedCca {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl JsonAdaptedCca {
    pub const ENTITY: &'static str = "Cca";

    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }

    /// Convert into a [`Cca`].
    ///
    /// # Errors
    ///
    /// - `IllegalValueError::MissingField` if the name is absent
    /// - `IllegalValueError::InvalidValue` with the name constraint if it is invalid
    pub fn to_model_type(&self) -> Result<Cca, IllegalValueError> {
        let name = require(&self.name, Self::ENTITY, "name")?;
        Ok(Cca::new(CcaName::new(name)?))
    }
}

impl From<&Cca> for JsonAdaptedCca {
    fn from(cca: &Cca) -> Self {
        Self::new(Some(cca.name().as_str().to_string()))
    }
}

/// Stored form of a [`Reminder`]. The start date is kept as `dd/MM/yyyy`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedReminder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

impl JsonAdaptedReminder {
    pub const ENTITY: &'static str = "Reminder";

    pub fn to_model_type(&self) -> Result<Reminder, IllegalValueError> {
        let name = ReminderName::new(require(&self.name, Self::ENTITY, "name")?)?;
        let start_date =
            ReminderStartDate::parse(require(&self.start_date, Self::ENTITY, "startDate")?)?;
        Ok(Reminder::new(name, start_date))
    }
}

impl From<&Reminder> for JsonAdaptedReminder {
    fn from(reminder: &Reminder) -> Self {
        Self {
            name: Some(reminder.name().as_str().to_string()),
            start_date: Some(reminder.start_date().to_string()),
        }
    }
}

/// The whole data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct JsonSerializableAddressBook {
    #[serde(default)]
    pub persons: Vec<JsonAdaptedPerson>,

    #[serde(default)]
    pub ccas: Vec<JsonAdaptedCca>,

    #[serde(default)]
    pub reminders: Vec<JsonAdaptedReminder>,
}

impl JsonSerializableAddressBook {
    /// Convert into an [`AddressBook`], rejecting invalid or duplicate entries.
    pub fn to_model_type(&self) -> Result<AddressBook, IllegalValueError> {
        let mut book = AddressBook::new();

        for cca in &self.ccas {
            book.add_cca(cca.to_model_type()?)
                .map_err(|_| IllegalValueError::Duplicate(MESSAGE_DUPLICATE_CCA))?;
        }
        for person in &self.persons {
            let person = person.to_model_type()?;
            if let Some(unknown) = person
                .ccas()
                .iter()
                .find(|name| !book.has_cca(&Cca::new((*name).clone())))
            {
                return Err(IllegalValueError::UnknownCca {
                    person: person.name().as_str().to_string(),
                    cca: unknown.as_str().to_string(),
                });
            }
            book.add_person(person)
                .map_err(|_| IllegalValueError::Duplicate(MESSAGE_DUPLICATE_PERSON))?;
        }
        for reminder in &self.reminders {
            book.add_reminder(reminder.to_model_type()?)
                .map_err(|_| IllegalValueError::Duplicate(MESSAGE_DUPLICATE_REMINDER))?;
        }

        Ok(book)
    }
}

impl From<&AddressBook> for JsonSerializableAddressBook {
    fn from(book: &AddressBook) -> Self {
        Self {
            persons: book.persons().iter().map(JsonAdaptedPerson::from).collect(),
            ccas: book.ccas().iter().map(JsonAdaptedCca::from).collect(),
            reminders: book.reminders().iter().map(JsonAdaptedReminder::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NAME_MESSAGE_CONSTRAINTS;

    fn valid_person() -> JsonAdaptedPerson {
        JsonAdaptedPerson {
            name: Some("Benson Meier".to_string()),
            phone: Some("98765432".to_string()),
            email: Some("johnd@example.com".to_string()),
            address: Some("311, Clementi Ave 2, #02-25".to_string()),
            tags: vec![
                JsonAdaptedTag("owesMoney".to_string()),
                JsonAdaptedTag("friends".to_string()),
            ],
            ccas: vec![],
        }
    }

    #[test]
    fn test_person_valid_details() {
        let person = valid_person().to_model_type().unwrap();
        assert_eq!(JsonAdaptedPerson::from(&person).to_model_type().unwrap(), person);
    }

    #[test]
    fn test_person_invalid_name() {
        let record = JsonAdaptedPerson {
            name: Some("R@chel".to_string()),
            ..valid_person()
        };
        assert_eq!(
            record.to_model_type().unwrap_err(),
            IllegalValueError::InvalidValue(NAME_MESSAGE_CONSTRAINTS)
        );
    }

    #[test]
    fn test_person_missing_fields() {
        for (record, field) in [
            (JsonAdaptedPerson { name: None, ..valid_person() }, "name"),
            (JsonAdaptedPerson { phone: None, ..valid_person() }, "phone"),
            (JsonAdaptedPerson { email: None, ..valid_person() }, "email"),
            (JsonAdaptedPerson { address: None, ..valid_person() }, "address"),
        ] {
            assert_eq!(
                record.to_model_type().unwrap_err().to_string(),
                format!("Person's {} field is missing!", field)
            );
        }
    }

    #[test]
    fn test_person_invalid_tag() {
        let mut record = valid_person();
        record.tags.push(JsonAdaptedTag("#friend".to_string()));
        assert_eq!(
            record.to_model_type().unwrap_err(),
            IllegalValueError::InvalidValue(Tag::MESSAGE_CONSTRAINTS)
        );
    }

    #[test]
    fn test_reminder_dates() {
        let record = JsonAdaptedReminder {
            name: Some("Concert".to_string()),
            start_date: Some("31/02/2024".to_string()),
        };
        assert_eq!(
            record.to_model_type().unwrap_err(),
            IllegalValueError::InvalidValue(ReminderStartDate::PARSE_DATE_CONSTRAINTS)
        );

        let record = JsonAdaptedReminder {
            name: Some("Concert".to_string()),
            start_date: None,
        };
        assert_eq!(
            record.to_model_type().unwrap_err().to_string(),
            "Reminder's startDate field is missing!"
        );
    }

    #[test]
    fn test_address_book_duplicates_rejected() {
        let data = JsonSerializableAddressBook {
            persons: vec![valid_person(), valid_person()],
            ..Default::default()
        };
        assert_eq!(
            data.to_model_type().unwrap_err(),
            IllegalValueError::Duplicate(MESSAGE_DUPLICATE_PERSON)
        );
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "persons": [{
                "name": "Benson Meier",
                "phone": "98765432",
                "email": "johnd@example.com",
                "address": "311, Clementi Ave 2, #02-25",
                "tags": ["friends"],
                "ccas": ["NUSSO"]
            }],
            "ccas": [{ "name": "NUSSO" }],
            "reminders": [{ "name": "Concert", "startDate": "20/05/2024" }]
        }"#;
        let data: JsonSerializableAddressBook = serde_json::from_str(json).unwrap();
        let book = data.to_model_type().unwrap();
        assert_eq!(book.persons().len(), 1);
        assert_eq!(book.ccas().len(), 1);
        assert_eq!(book.reminders()[0].start_date().to_string(), "20/05/2024");
        assert_eq!(JsonSerializableAddressBook::from(&book), data);
    }

    #[test]
    fn test_enrolment_in_unknown_cca_rejected() {
        let data = JsonSerializableAddressBook {
            persons: vec![JsonAdaptedPerson {
                ccas: vec!["Ghost".to_string()],
                ..valid_person()
            }],
            ccas: vec![JsonAdaptedCca::new(Some("NUSSO".to_string()))],
            ..Default::default()
        };
        let err = data.to_model_type().unwrap_err();
        assert_eq!(
            err,
            IllegalValueError::UnknownCca {
                person: "Benson Meier".to_string(),
                cca: "Ghost".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Benson Meier is enrolled in Ghost, which is not in the CCAs list"
        );
    }
}
