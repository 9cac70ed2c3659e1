use async_trait::async_trait;
use cca_manager::error::{StorageError, StorageResult};
use cca_manager::models::AddressBook;
use cca_manager::storage::AddressBookStorage;
use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock address book storage for testing.
///
/// Keeps the saved address book in memory and tracks method calls for
/// verification. Can be told to fail reads or saves.
#[derive(Clone, Default)]
pub struct MockAddressBookStorage {
    stored: Arc<Mutex<Option<AddressBook>>>,
    fail_reads: Arc<Mutex<bool>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

impl MockAddressBookStorage {
    /// Create a new empty MockAddressBookStorage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let storage = Self::new();
        *storage.stored.lock().unwrap() = Some(book);
        storage
    }

    /// Make every read fail with an I/O error.
    pub fn fail_reads(&self) {
        *self.fail_reads.lock().unwrap() = true;
    }

    /// Make every save fail with an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// The last saved address book.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.lock().unwrap().clone()
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl AddressBookStorage for MockAddressBookStorage {
    fn file_path(&self) -> &Path {
        Path::new("mock://addressbook.json")
    }

    async fn read_address_book(&self) -> StorageResult<Option<AddressBook>> {
        self.track_call("read_address_book");
        if *self.fail_reads.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock read failure",
            )));
        }
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save_address_book(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save_address_book");
        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock save failure",
            )));
        }
        *self.stored.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
