//! Default `Storage` implementation.
//!
//! # Responsibility
//! - Own the address book connection for the session.
//! - Route preference reads/writes to JSON storage.
//!
//! # Invariants
//! - The held connection has all migrations applied.

use crate::db::{open_db, open_db_in_memory};
use crate::model::address_book::AddressBook;
use crate::model::user_prefs::UserPrefs;
use crate::repo::person_repo::{PersonRepository, SqlitePersonRepository};
use crate::storage::{JsonUserPrefsStorage, Storage, StorageError, StorageResult};
use log::{error, warn};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// SQLite address book plus JSON preferences.
pub struct StorageManager {
    conn: Connection,
    address_book_file_path: PathBuf,
    prefs_storage: JsonUserPrefsStorage,
}

impl StorageManager {
    /// Opens (creating and migrating if needed) the address book file.
    pub fn open(
        address_book_file_path: impl Into<PathBuf>,
        prefs_storage: JsonUserPrefsStorage,
    ) -> StorageResult<Self> {
        let address_book_file_path = address_book_file_path.into();
        let conn = open_db(&address_book_file_path)?;
        Ok(Self {
            conn,
            address_book_file_path,
            prefs_storage,
        })
    }

    /// Keeps the address book in memory only; preferences still go to disk.
    pub fn in_memory(prefs_storage: JsonUserPrefsStorage) -> StorageResult<Self> {
        let conn = open_db_in_memory()?;
        Ok(Self {
            conn,
            address_book_file_path: PathBuf::from(":memory:"),
            prefs_storage,
        })
    }

    /// Copies the stored address book, as is, next to the data file.
    ///
    /// Used before a session starts from an empty book because the stored one
    /// could not be read; the copy keeps the unreadable rows recoverable.
    /// Returns the path of the new `<file>.<unix-seconds>.bak` copy.
    pub fn back_up_address_book(&self) -> StorageResult<PathBuf> {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        let mut backup = self.address_book_file_path.clone().into_os_string();
        backup.push(format!(".{stamp}.bak"));
        let backup = PathBuf::from(backup);

        let target = backup.to_string_lossy().into_owned();
        if let Err(source) = self.conn.execute("VACUUM INTO ?1;", [target]) {
            error!("event=address_book_backup module=storage status=error error={source}");
            return Err(StorageError::Backup {
                path: backup,
                source,
            });
        }

        warn!("event=address_book_backup module=storage status=ok");
        Ok(backup)
    }
}

impl Storage for StorageManager {
    fn user_prefs_file_path(&self) -> &Path {
        self.prefs_storage.path()
    }

    fn read_user_prefs(&self) -> StorageResult<Option<UserPrefs>> {
        self.prefs_storage.read_user_prefs()
    }

    fn save_user_prefs(&self, user_prefs: &UserPrefs) -> StorageResult<()> {
        self.prefs_storage.save_user_prefs(user_prefs)
    }

    fn address_book_file_path(&self) -> &Path {
        self.address_book_file_path.as_path()
    }

    fn read_address_book(&self) -> StorageResult<Option<AddressBook>> {
        let repo = SqlitePersonRepository::try_new(&self.conn)?;
        Ok(repo.load_address_book()?)
    }

    fn save_address_book(&mut self, address_book: &AddressBook) -> StorageResult<()> {
        let repo = SqlitePersonRepository::try_new(&self.conn)?;
        repo.save_address_book(address_book)?;
        Ok(())
    }
}
