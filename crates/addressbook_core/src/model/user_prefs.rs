//! Process-wide user preferences.
//!
//! Loaded once at startup and passed explicitly to the components that need
//! it; there is no global preferences instance.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_ADDRESS_BOOK_FILE: &str = "data/addressbook.sqlite3";

/// Persisted user preferences.
///
/// Unknown or missing keys fall back to defaults so older preference files
/// keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPrefs {
    /// Location of the address book database file.
    pub address_book_file_path: PathBuf,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            address_book_file_path: PathBuf::from(DEFAULT_ADDRESS_BOOK_FILE),
        }
    }
}
