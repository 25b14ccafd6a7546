//! Storage facade over user preferences and address book persistence.
//!
//! # Responsibility
//! - Define the `Storage` contract consumed by the logic layer.
//! - Map preference I/O and repository failures into one error type.
//!
//! # Invariants
//! - A missing preferences file or never-saved address book reads as `None`.

use crate::db::DbError;
use crate::model::address_book::AddressBook;
use crate::model::user_prefs::UserPrefs;
use crate::repo::person_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

mod prefs_storage;
mod storage_manager;

pub use prefs_storage::JsonUserPrefsStorage;
pub use storage_manager::StorageManager;

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-layer failure.
#[derive(Debug)]
pub enum StorageError {
    Repo(RepoError),
    /// Preferences file could not be read or written.
    PrefsIo {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Preferences file content is not valid preferences JSON.
    PrefsFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The address book could not be copied to a backup file.
    Backup {
        path: PathBuf,
        source: rusqlite::Error,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::PrefsIo { path, source } => {
                write!(f, "preferences file `{}`: {source}", path.display())
            }
            Self::PrefsFormat { path, source } => write!(
                f,
                "preferences file `{}` is malformed: {source}",
                path.display()
            ),
            Self::Backup { path, source } => write!(
                f,
                "failed to back up address book to `{}`: {source}",
                path.display()
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::PrefsIo { source, .. } => Some(source),
            Self::PrefsFormat { source, .. } => Some(source),
            Self::Backup { source, .. } => Some(source),
        }
    }
}

impl From<RepoError> for StorageError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Repo(RepoError::Db(value))
    }
}

/// Persistence contract used by `LogicManager`.
pub trait Storage {
    fn user_prefs_file_path(&self) -> &Path;
    fn read_user_prefs(&self) -> StorageResult<Option<UserPrefs>>;
    fn save_user_prefs(&self, user_prefs: &UserPrefs) -> StorageResult<()>;

    fn address_book_file_path(&self) -> &Path;
    fn read_address_book(&self) -> StorageResult<Option<AddressBook>>;
    fn save_address_book(&mut self, address_book: &AddressBook) -> StorageResult<()>;
}
