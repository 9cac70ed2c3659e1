use crate::error::StorageResult;
use crate::models::AddressBook;
use async_trait::async_trait;
use std::path::Path;

/// Persistence for the address book.
///
/// Provides abstraction over where the address book lives, enabling
/// different implementations (JSON file, in-memory mock).
#[async_trait]
pub trait AddressBookStorage: Send + Sync {
    /// Location of the backing data, for display.
    fn file_path(&self) -> &Path;

    /// Read the stored address book.
    ///
    /// Returns `Ok(None)` if nothing has been stored yet.
    async fn read_address_book(&self) -> StorageResult<Option<AddressBook>>;

    /// Replace the stored address book with `book`.
    async fn save_address_book(&self, book: &AddressBook) -> StorageResult<()>;
}
