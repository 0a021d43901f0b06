//! JSON flat-file roster storage.
//!
//! # Responsibility
//! - Read and write the whole roster as one JSON array on disk.
//!
//! # Invariants
//! - `save` uses create-or-truncate semantics; no atomic rename, no backup.
//!   A failed write may leave a truncated file.
//! - No file handle outlives a single `load` or `save` call.
//! - The data folder is never created implicitly.

use super::{StoreError, StoreResult, UserStore};
use crate::model::user::User;
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Fixed data folder, relative to the process working directory.
pub const DATA_DIR: &str = "user_data";
/// Roster file name inside [`DATA_DIR`].
pub const DATA_FILE: &str = "user_data.json";

/// JSON-file-backed roster store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store over the default `user_data/user_data.json` location.
    pub fn default_location() -> Self {
        Self::new(Path::new(DATA_DIR).join(DATA_FILE))
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<User>> {
        let started_at = Instant::now();

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                error!(
                    "event=store_load module=store status=error duration_ms={} error_code=file_read_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        match serde_json::from_str::<Vec<User>>(&raw) {
            Ok(users) => {
                info!(
                    "event=store_load module=store status=ok duration_ms={} count={}",
                    started_at.elapsed().as_millis(),
                    users.len()
                );
                Ok(users)
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error duration_ms={} error_code=json_decode_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(StoreError::Parse(err))
            }
        }
    }

    fn save(&mut self, users: &[User]) -> StoreResult<()> {
        let started_at = Instant::now();
        let encoded = serde_json::to_string_pretty(users)?;

        match fs::write(&self.path, encoded) {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok duration_ms={} count={}",
                    started_at.elapsed().as_millis(),
                    users.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error duration_ms={} error_code=file_write_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }
}
