//! Wires the parser, the model and storage together.

use crate::commands::CommandResult;
use crate::error::{LogicError, StorageResult};
use crate::models::{AddressBook, Model};
use crate::parser::AddressBookParser;
use crate::storage::AddressBookStorage;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Executes user input against the model and persists changes.
pub struct LogicManager {
    model: Model,
    parser: AddressBookParser,
    storage: Arc<dyn AddressBookStorage>,
    autosave: bool,
    dirty: bool,
}

impl LogicManager {
    pub fn new(model: Model, storage: Arc<dyn AddressBookStorage>, autosave: bool) -> Self {
        Self {
            model,
            parser: AddressBookParser::new(),
            storage,
            autosave,
            dirty: false,
        }
    }

    /// Build a manager from whatever `storage` holds.
    ///
    /// A missing data file gives an empty address book. So does an unreadable
    /// or invalid one; the error is logged and the file is left untouched
    /// until the next save.
    pub async fn load(storage: Arc<dyn AddressBookStorage>, autosave: bool) -> Self {
        let book = match storage.read_address_book().await {
            Ok(Some(book)) => book,
            Ok(None) => {
                info!(
                    path = %storage.file_path().display(),
                    "Data file not found. Starting with an empty address book"
                );
                AddressBook::new()
            }
            Err(e) => {
                warn!(
                    path = %storage.file_path().display(),
                    error = %e,
                    "Data file could not be loaded. Starting with an empty address book"
                );
                AddressBook::new()
            }
        };
        Self::new(Model::new(book), storage, autosave)
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Parse and execute one line of user input.
    ///
    /// If autosave fails after a change, the change stays in memory and
    /// `LogicError::Unsaved` carries the command's feedback. The next
    /// successful save writes it out.
    pub async fn execute(&mut self, input: &str) -> Result<CommandResult, LogicError> {
        let command = self.parser.parse_command(input)?;
        debug!(?command, "Executing command");
        let result = command.execute(&mut self.model)?;

        if command.is_mutating() {
            self.dirty = true;
            if self.autosave {
                if let Err(source) = self.flush().await {
                    warn!(error = %source, "Autosave failed");
                    return Err(LogicError::Unsaved {
                        feedback: result.feedback,
                        source,
                    });
                }
            }
        }
        if result.exit {
            self.flush().await?;
        }
        Ok(result)
    }

    /// Save if there are unsaved changes.
    pub async fn flush(&mut self) -> StorageResult<()> {
        if !self.dirty {
            return Ok(());
        }
        self.storage
            .save_address_book(self.model.address_book())
            .await?;
        self.dirty = false;
        Ok(())
    }
}
