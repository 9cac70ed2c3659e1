//! Tests for the parse → execute → save pipeline.

mod mocks;

use cca_manager::domain::{CcaName, NamedValue};
use cca_manager::error::{CommandError, LogicError, ParseError, StorageError};
use cca_manager::storage::AddressBookStorage;
use cca_manager::{AddressBook, Cca, LogicManager};
use mocks::MockAddressBookStorage;
use std::sync::Arc;

async fn logic_with(storage: &MockAddressBookStorage, autosave: bool) -> LogicManager {
    let storage = Arc::new(storage.clone()) as Arc<dyn AddressBookStorage>;
    LogicManager::load(storage, autosave).await
}

const ADD_ALICE: &str =
    "person add n/Alice Pauline p/94351253 e/alice@example.com a/123, Jurong West Ave 6 t/friends";
const ADD_BENSON: &str =
    "person add n/Benson Meier p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25";

#[tokio::test]
async fn test_load_missing_data_starts_empty() {
    let storage = MockAddressBookStorage::new();
    let logic = logic_with(&storage, true).await;
    assert!(logic.model().address_book().persons().is_empty());
    assert_eq!(storage.get_call_count("read_address_book"), 1);
}

#[tokio::test]
async fn test_load_existing_book() {
    let mut book = AddressBook::new();
    book.add_cca(Cca::new(CcaName::new("NUSSO").unwrap())).unwrap();
    let storage = MockAddressBookStorage::with_book(book);

    let mut logic = logic_with(&storage, true).await;
    assert_eq!(logic.model().address_book().ccas().len(), 1);

    let err = logic.execute("cca add n/NUSSO").await.unwrap_err();
    assert_eq!(err.to_string(), "This cca already exists in the address book");
    assert_eq!(storage.get_call_count("save_address_book"), 0);
}

#[tokio::test]
async fn test_load_failure_starts_empty() {
    let storage = MockAddressBookStorage::new();
    storage.fail_reads();
    let logic = logic_with(&storage, true).await;
    assert!(logic.model().address_book().persons().is_empty());
    assert_eq!(storage.get_call_count("save_address_book"), 0);
}

#[tokio::test]
async fn test_autosave_after_mutating_command() {
    let storage = MockAddressBookStorage::new();
    let mut logic = logic_with(&storage, true).await;

    let result = logic.execute(ADD_ALICE).await.unwrap();
    assert!(result.feedback.starts_with("New person added: Alice Pauline"));
    assert_eq!(storage.get_call_count("save_address_book"), 1);
    assert_eq!(storage.stored().unwrap().persons().len(), 1);

    logic.execute("person list").await.unwrap();
    assert_eq!(storage.get_call_count("save_address_book"), 1);
}

#[tokio::test]
async fn test_without_autosave_changes_saved_on_exit() {
    let storage = MockAddressBookStorage::new();
    let mut logic = logic_with(&storage, false).await;

    logic.execute(ADD_ALICE).await.unwrap();
    logic.execute("cca add n/NUSSO").await.unwrap();
    assert_eq!(storage.get_call_count("save_address_book"), 0);

    let result = logic.execute("exit").await.unwrap();
    assert!(result.exit);
    assert_eq!(storage.get_call_count("save_address_book"), 1);
    let stored = storage.stored().unwrap();
    assert_eq!(stored.persons().len(), 1);
    assert_eq!(stored.ccas().len(), 1);
}

#[tokio::test]
async fn test_parse_error_is_reported() {
    let storage = MockAddressBookStorage::new();
    let mut logic = logic_with(&storage, true).await;

    let err = logic.execute("person delete 0").await.unwrap_err();
    assert!(matches!(
        err,
        LogicError::Parse(ParseError::InvalidCommandFormat { .. })
    ));

    let err = logic.execute("dance").await.unwrap_err();
    assert_eq!(err.to_string(), "Unknown command");
}

#[tokio::test]
async fn test_duplicate_and_out_of_range() {
    let storage = MockAddressBookStorage::new();
    let mut logic = logic_with(&storage, true).await;
    logic.execute(ADD_ALICE).await.unwrap();

    let err = logic.execute(ADD_ALICE).await.unwrap_err();
    assert!(matches!(
        err,
        LogicError::Command(CommandError::Duplicate { kind: "person" })
    ));
    assert_eq!(err.to_string(), "This person already exists in the address book");

    let err = logic.execute("person delete 3").await.unwrap_err();
    assert_eq!(err.to_string(), "The person index provided is invalid");
    assert_eq!(storage.get_call_count("save_address_book"), 1);
}

#[tokio::test]
async fn test_find_then_delete_uses_displayed_list() {
    let storage = MockAddressBookStorage::new();
    let mut logic = logic_with(&storage, true).await;
    logic.execute(ADD_ALICE).await.unwrap();
    logic.execute(ADD_BENSON).await.unwrap();

    let result = logic.execute("person find meier").await.unwrap();
    assert!(result.feedback.starts_with("1 persons listed!"));

    logic.execute("person delete 1").await.unwrap();
    let stored = storage.stored().unwrap();
    assert_eq!(stored.persons().len(), 1);
    assert_eq!(stored.persons()[0].name().to_string(), "Alice Pauline");
}

#[tokio::test]
async fn test_enrol_and_delete_cca() {
    let storage = MockAddressBookStorage::new();
    let mut logic = logic_with(&storage, true).await;
    logic.execute(ADD_ALICE).await.unwrap();
    logic.execute("cca add n/NUSSO").await.unwrap();

    let result = logic.execute("cca enrol c/1 p/1").await.unwrap();
    assert_eq!(result.feedback, "Enrolled Alice Pauline in NUSSO");

    let result = logic.execute("cca list").await.unwrap();
    assert!(result.feedback.contains("1. NUSSO (1 members)"));

    let err = logic.execute("cca enrol c/one p/1").await.unwrap_err();
    assert_eq!(err.to_string(), "Please input cid as a number");

    logic.execute("cca delete 1").await.unwrap();
    let stored = storage.stored().unwrap();
    assert!(stored.ccas().is_empty());
    assert!(stored.persons()[0].ccas().is_empty());
}

#[tokio::test]
async fn test_reminders() {
    let storage = MockAddressBookStorage::new();
    let mut logic = logic_with(&storage, true).await;

    logic
        .execute("reminder add n/Concert d/20/05/2024")
        .await
        .unwrap();
    logic
        .execute("reminder add n/Auditions d/1/2/2024")
        .await
        .unwrap();

    let result = logic.execute("reminder list").await.unwrap();
    assert_eq!(
        result.feedback,
        "Listed all reminders\n1. Auditions; Start date: 01/02/2024\n2. Concert; Start date: 20/05/2024"
    );

    let err = logic
        .execute("reminder add n/Finale d/31/06/2024")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        LogicError::Parse(ParseError::UnparsableDate(_))
    ));

    logic.execute("reminder delete 1").await.unwrap();
    let stored = storage.stored().unwrap();
    assert_eq!(stored.reminders().len(), 1);
    assert_eq!(stored.reminders()[0].name().to_string(), "Concert");
}

#[tokio::test]
async fn test_clear() {
    let storage = MockAddressBookStorage::new();
    let mut logic = logic_with(&storage, true).await;
    logic.execute(ADD_ALICE).await.unwrap();

    let result = logic.execute("clear").await.unwrap();
    assert_eq!(result.feedback, "Address book has been cleared!");
    assert!(storage.stored().unwrap().persons().is_empty());
}

#[tokio::test]
async fn test_failed_autosave_keeps_change_and_retries() {
    let storage = MockAddressBookStorage::new();
    let mut logic = logic_with(&storage, true).await;
    storage.fail_saves(true);

    let err = logic.execute(ADD_ALICE).await.unwrap_err();
    match &err {
        LogicError::Unsaved { feedback, source } => {
            assert!(feedback.starts_with("New person added: Alice Pauline"));
            assert!(matches!(source, StorageError::Io(_)));
        }
        other => panic!("Expected Unsaved error, got: {:?}", other),
    }
    assert!(err.to_string().contains("This change is not saved yet"));
    assert_eq!(logic.model().address_book().persons().len(), 1);
    assert!(storage.stored().is_none());

    storage.fail_saves(false);
    logic.flush().await.unwrap();
    assert_eq!(storage.stored().unwrap().persons().len(), 1);
}
