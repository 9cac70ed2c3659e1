//! Executable commands.
//!
//! A [`Command`] is produced by the parser layer and executed against the
//! [`Model`]. Execution never touches storage; the logic layer decides when
//! to save based on [`Command::is_mutating`].

pub mod cca;
pub mod person;
pub mod reminder;

pub use cca::{CcaAddCommand, CcaDeleteCommand, CcaEnrolCommand};
pub use person::{
    EditPersonDescriptor, PersonAddCommand, PersonDeleteCommand, PersonEditCommand,
    PersonFindCommand,
};
pub use reminder::{ReminderAddCommand, ReminderDeleteCommand};

use crate::error::ExecutionResult;
use crate::models::Model;

pub const HELP_MESSAGE: &str = "Commands:\n  \
person add n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...\n  \
person edit INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...\n  \
person delete INDEX\n  \
person find KEYWORD [MORE_KEYWORDS]...\n  \
person list\n  \
cca add n/NAME\n  \
cca delete INDEX\n  \
cca enrol c/CID p/PID\n  \
cca list\n  \
reminder add n/NAME d/START_DATE\n  \
reminder delete INDEX\n  \
reminder list\n  \
clear\n  \
help\n  \
exit";

pub const MESSAGE_CLEARED: &str = "Address book has been cleared!";

pub const MESSAGE_EXIT: &str = "Exiting address book as requested ...";

/// Outcome of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Text shown to the user
    pub feedback: String,

    /// Whether the application should exit
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: false,
        }
    }

    fn exit(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: true,
        }
    }
}

/// Every command the application understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    PersonAdd(PersonAddCommand),
    PersonEdit(PersonEditCommand),
    PersonDelete(PersonDeleteCommand),
    PersonFind(PersonFindCommand),
    PersonList,
    CcaAdd(CcaAddCommand),
    CcaDelete(CcaDeleteCommand),
    CcaEnrol(CcaEnrolCommand),
    CcaList,
    ReminderAdd(ReminderAddCommand),
    ReminderDelete(ReminderDeleteCommand),
    ReminderList,
    Clear,
    Help,
    Exit,
}

impl Command {
    /// Returns true if executing this command changes the address book.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::PersonAdd(_)
                | Self::PersonEdit(_)
                | Self::PersonDelete(_)
                | Self::CcaAdd(_)
                | Self::CcaDelete(_)
                | Self::CcaEnrol(_)
                | Self::ReminderAdd(_)
                | Self::ReminderDelete(_)
                | Self::Clear
        )
    }

    pub fn execute(&self, model: &mut Model) -> ExecutionResult<CommandResult> {
        match self {
            Self::PersonAdd(cmd) => cmd.execute(model),
            Self::PersonEdit(cmd) => cmd.execute(model),
            Self::PersonDelete(cmd) => cmd.execute(model),
            Self::PersonFind(cmd) => cmd.execute(model),
            Self::PersonList => Ok(person::list_persons(model)),
            Self::CcaAdd(cmd) => cmd.execute(model),
            Self::CcaDelete(cmd) => cmd.execute(model),
            Self::CcaEnrol(cmd) => cmd.execute(model),
            Self::CcaList => Ok(cca::list_ccas(model)),
            Self::ReminderAdd(cmd) => cmd.execute(model),
            Self::ReminderDelete(cmd) => cmd.execute(model),
            Self::ReminderList => Ok(reminder::list_reminders(model)),
            Self::Clear => {
                model.address_book_mut().clear();
                model.update_person_filter(None);
                Ok(CommandResult::new(MESSAGE_CLEARED))
            }
            Self::Help => Ok(CommandResult::new(HELP_MESSAGE)),
            Self::Exit => Ok(CommandResult::exit(MESSAGE_EXIT)),
        }
    }
}
