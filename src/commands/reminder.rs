//! Commands acting on reminders.

use crate::commands::CommandResult;
use crate::domain::Index;
use crate::error::{CommandError, ExecutionResult};
use crate::models::address_book::REMINDER;
use crate::models::{Model, Reminder};
use tracing::info;

pub const REMINDER_ADD_USAGE: &str = "reminder add: Adds a reminder. \
Parameters: n/NAME d/START_DATE (dd/MM/yyyy)\n\
Example: reminder add n/Concert rehearsal d/20/05/2024";

pub const REMINDER_DELETE_USAGE: &str = "reminder delete: Deletes the reminder identified by \
the index number used in the reminder list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: reminder delete 1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderAddCommand {
    pub reminder: Reminder,
}

impl ReminderAddCommand {
    pub fn execute(&self, model: &mut Model) -> ExecutionResult<CommandResult> {
        model.address_book_mut().add_reminder(self.reminder.clone())?;
        info!(name = %self.reminder.name(), "Added reminder");
        Ok(CommandResult::new(format!(
            "New reminder added: {}",
            self.reminder
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderDeleteCommand {
    pub index: Index,
}

impl ReminderDeleteCommand {
    pub fn execute(&self, model: &mut Model) -> ExecutionResult<CommandResult> {
        let target = model.reminder_at(self.index)?.clone();
        if !model.address_book_mut().remove_reminder(&target) {
            return Err(CommandError::InvalidIndex { kind: REMINDER });
        }
        info!(name = %target.name(), "Deleted reminder");
        Ok(CommandResult::new(format!("Deleted Reminder: {}", target)))
    }
}

pub fn list_reminders(model: &Model) -> CommandResult {
    let reminders = model.address_book().reminders();
    if reminders.is_empty() {
        return CommandResult::new("No reminders in the address book");
    }
    let lines: Vec<String> = reminders
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {}", i + 1, r))
        .collect();
    CommandResult::new(format!("Listed all reminders\n{}", lines.join("\n")))
}
