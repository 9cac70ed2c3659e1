//! Reminder entity.

use crate::domain::{ReminderName, ReminderStartDate};
use std::fmt;

/// A dated reminder, such as a rehearsal or a fee deadline.
///
/// Two reminders are the same when both the name and start date match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reminder {
    name: ReminderName,
    start_date: ReminderStartDate,
}

impl Reminder {
    pub fn new(name: ReminderName, start_date: ReminderStartDate) -> Self {
        Self { name, start_date }
    }

    pub fn name(&self) -> &ReminderName {
        &self.name
    }

    pub fn start_date(&self) -> &ReminderStartDate {
        &self.start_date
    }

    pub fn is_same_reminder(&self, other: &Reminder) -> bool {
        self == other
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; Start date: {}", self.name, self.start_date)
    }
}
