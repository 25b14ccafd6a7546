mod common;

use addressbook_core::db::migrations::{apply_migrations, latest_version};
use addressbook_core::db::{open_db, open_db_in_memory, DbError};
use addressbook_core::{
    AddressBook, JsonUserPrefsStorage, PersonRepository, RepoError, SqlitePersonRepository,
    Storage, StorageError, StorageManager, UserPrefs,
};
use common::{alice, benson, typical_address_book, PersonBuilder};
use rusqlite::Connection;
use std::path::PathBuf;

#[test]
fn open_db_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());

    let foreign_keys: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(foreign_keys, 1);
}

#[test]
fn open_db_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("data").join("book.sqlite3");

    open_db(&path).unwrap();

    assert!(path.exists());
}

#[test]
fn migrating_first_schema_adds_empty_remarks() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE persons (
            position INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            phone TEXT NOT NULL,
            email TEXT NOT NULL,
            address TEXT NOT NULL
        );
        CREATE TABLE person_tags (
            person_position INTEGER NOT NULL
                REFERENCES persons(position) ON DELETE CASCADE,
            tag TEXT NOT NULL,
            PRIMARY KEY (person_position, tag)
        );
        CREATE TABLE address_book_meta (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            saved_at INTEGER NOT NULL
        );
        INSERT INTO persons (position, name, phone, email, address)
        VALUES (0, 'Carl Kurz', '95352563', 'heinz@example.com', 'wall street');
        INSERT INTO address_book_meta (id, saved_at) VALUES (1, 0);
        PRAGMA user_version = 1;",
    )
    .unwrap();

    apply_migrations(&mut conn).unwrap();

    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    let book = repo.load_address_book().unwrap().unwrap();
    assert_eq!(book.len(), 1);
    assert_eq!(book.persons()[0].name.as_str(), "Carl Kurz");
    assert!(book.persons()[0].remark.is_empty());
}

#[test]
fn newer_schema_version_is_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
        .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();

    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion { db_version, .. } if db_version == latest_version() + 1
    ));
}

#[test]
fn repository_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqlitePersonRepository::try_new(&conn).err().unwrap();
    assert!(matches!(
        err,
        RepoError::UninitializedConnection {
            actual_version: 0,
            ..
        }
    ));
}

#[test]
fn repository_rejects_missing_table() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("DROP TABLE person_tags;").unwrap();

    let err = SqlitePersonRepository::try_new(&conn).err().unwrap();

    assert!(matches!(err, RepoError::MissingRequiredTable("person_tags")));
}

#[test]
fn never_saved_address_book_loads_as_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    assert!(repo.load_address_book().unwrap().is_none());
}

#[test]
fn saved_empty_address_book_loads_as_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();

    repo.save_address_book(&AddressBook::new()).unwrap();

    assert_eq!(repo.load_address_book().unwrap(), Some(AddressBook::new()));
}

#[test]
fn round_trip_preserves_order_remarks_and_tags() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    let book = typical_address_book();

    repo.save_address_book(&book).unwrap();
    let loaded = repo.load_address_book().unwrap().unwrap();

    assert_eq!(loaded, book);
    assert_eq!(loaded.persons()[0].remark, alice().remark);
    assert_eq!(loaded.persons()[1].tags, benson().tags);
}

#[test]
fn save_replaces_previous_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    repo.save_address_book(&typical_address_book()).unwrap();

    let smaller = AddressBook::from_persons(vec![benson(), alice()]).unwrap();
    repo.save_address_book(&smaller).unwrap();

    assert_eq!(repo.load_address_book().unwrap(), Some(smaller));
    let tag_rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM person_tags;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(tag_rows, 3);
}

#[test]
fn corrupted_row_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    repo.save_address_book(&typical_address_book()).unwrap();
    conn.execute("UPDATE persons SET phone = 'abc' WHERE position = 0;", [])
        .unwrap();

    let err = repo.load_address_book().unwrap_err();

    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn duplicate_persons_on_disk_are_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::try_new(&conn).unwrap();
    repo.save_address_book(&typical_address_book()).unwrap();
    conn.execute(
        "UPDATE persons SET name = 'ALICE  pauline' WHERE position = 1;",
        [],
    )
    .unwrap();

    assert!(matches!(
        repo.load_address_book().unwrap_err(),
        RepoError::InvalidData(_)
    ));
}

#[test]
fn storage_manager_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let book_path = dir.path().join("data").join("addressbook.sqlite3");
    let prefs_path = dir.path().join("preferences.json");
    let book = AddressBook::from_persons(vec![
        alice(),
        PersonBuilder::default().remark("met at conference").build(),
    ])
    .unwrap();

    {
        let mut storage =
            StorageManager::open(&book_path, JsonUserPrefsStorage::new(&prefs_path)).unwrap();
        assert_eq!(storage.address_book_file_path(), book_path.as_path());
        assert!(storage.read_address_book().unwrap().is_none());
        storage.save_address_book(&book).unwrap();
    }

    let storage = StorageManager::open(&book_path, JsonUserPrefsStorage::new(&prefs_path)).unwrap();
    assert_eq!(storage.read_address_book().unwrap(), Some(book));
}

#[test]
fn storage_manager_round_trips_user_prefs() {
    let dir = tempfile::tempdir().unwrap();
    let prefs_path = dir.path().join("config").join("preferences.json");
    let storage = StorageManager::in_memory(JsonUserPrefsStorage::new(&prefs_path)).unwrap();
    assert_eq!(storage.user_prefs_file_path(), prefs_path.as_path());
    assert!(storage.read_user_prefs().unwrap().is_none());

    let prefs = UserPrefs {
        address_book_file_path: PathBuf::from("elsewhere/book.sqlite3"),
    };
    storage.save_user_prefs(&prefs).unwrap();

    assert_eq!(storage.read_user_prefs().unwrap(), Some(prefs));
}

#[test]
fn malformed_prefs_file_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let prefs_path = dir.path().join("preferences.json");
    std::fs::write(&prefs_path, "{ not json").unwrap();
    let storage = StorageManager::in_memory(JsonUserPrefsStorage::new(&prefs_path)).unwrap();

    assert!(matches!(
        storage.read_user_prefs().unwrap_err(),
        StorageError::PrefsFormat { .. }
    ));
}

#[test]
fn backup_keeps_unreadable_rows() {
    let dir = tempfile::tempdir().unwrap();
    let book_path = dir.path().join("addressbook.sqlite3");
    let prefs_path = dir.path().join("preferences.json");
    let mut storage =
        StorageManager::open(&book_path, JsonUserPrefsStorage::new(&prefs_path)).unwrap();
    storage.save_address_book(&typical_address_book()).unwrap();
    Connection::open(&book_path)
        .unwrap()
        .execute("UPDATE persons SET email = 'broken' WHERE position = 2;", [])
        .unwrap();
    assert!(storage.read_address_book().is_err());

    let backup = storage.back_up_address_book().unwrap();

    assert!(backup.exists());
    assert_ne!(backup, book_path);
    assert!(backup.to_string_lossy().ends_with(".bak"));
    let copy = Connection::open(&backup).unwrap();
    let rows: i64 = copy
        .query_row("SELECT COUNT(*) FROM persons;", [], |row| row.get(0))
        .unwrap();
    let broken: String = copy
        .query_row("SELECT email FROM persons WHERE position = 2;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(rows, 7);
    assert_eq!(broken, "broken");
}

#[test]
fn failed_schema_step_is_named_and_rolled_back() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA user_version = 1;").unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();

    assert!(matches!(err, DbError::MigrationFailed { version: 2, .. }));
    assert!(err.to_string().contains("step 2"));
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, 1);
}
