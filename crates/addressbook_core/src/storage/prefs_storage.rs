//! JSON file storage for user preferences.

use crate::model::user_prefs::UserPrefs;
use crate::storage::{StorageError, StorageResult};
use log::info;
use std::path::{Path, PathBuf};

/// Reads and writes `UserPrefs` as pretty-printed JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonUserPrefsStorage {
    path: PathBuf,
}

impl JsonUserPrefsStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Returns `None` when the file does not exist.
    pub fn read_user_prefs(&self) -> StorageResult<Option<UserPrefs>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::PrefsIo {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::PrefsFormat {
                path: self.path.clone(),
                source,
            })
    }

    /// Writes `user_prefs`, creating parent directories as needed.
    pub fn save_user_prefs(&self, user_prefs: &UserPrefs) -> StorageResult<()> {
        let io_error = |source| StorageError::PrefsIo {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let json =
            serde_json::to_string_pretty(user_prefs).map_err(|source| StorageError::PrefsFormat {
                path: self.path.clone(),
                source,
            })?;
        std::fs::write(&self.path, json).map_err(io_error)?;

        info!("event=prefs_save module=storage status=ok");
        Ok(())
    }
}
