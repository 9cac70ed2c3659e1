use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::storage::json_adapted::JsonSerializableAddressBook;
use crate::storage::traits::AddressBookStorage;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Address book storage backed by a pretty-printed JSON file.
pub struct JsonAddressBookStorage {
    path: PathBuf,
}

impl JsonAddressBookStorage {
    /// Create a storage for the file at `path`. Nothing is read until
    /// [`AddressBookStorage::read_address_book`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AddressBookStorage for JsonAddressBookStorage {
    fn file_path(&self) -> &Path {
        &self.path
    }

    async fn read_address_book(&self) -> StorageResult<Option<AddressBook>> {
        if !tokio::fs::try_exists(&self.path).await? {
            info!(path = %self.path.display(), "Data file not found");
            return Ok(None);
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        let data: JsonSerializableAddressBook = serde_json::from_str(&content)?;
        let book = data.to_model_type()?;
        debug!(
            persons = book.persons().len(),
            ccas = book.ccas().len(),
            reminders = book.reminders().len(),
            "Loaded address book"
        );
        Ok(Some(book))
    }

    async fn save_address_book(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(&JsonSerializableAddressBook::from(book))?;
        tokio::fs::write(&self.path, json).await?;
        debug!(path = %self.path.display(), "Saved address book");
        Ok(())
    }
}
