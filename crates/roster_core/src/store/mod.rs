//! Storage layer for the roster file.
//!
//! # Responsibility
//! - Define the whole-collection load/save contract.
//! - Isolate file-system and JSON codec details from session orchestration.
//!
//! # Invariants
//! - Writes always serialize the full collection; there are no partial
//!   updates and no indexing.
//! - Read paths reject malformed persisted state instead of masking it.

use crate::model::user::User;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod json_store;
pub mod memory;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for whole-roster load and save operations.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "malformed roster data: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Storage contract for whole-roster persistence.
pub trait UserStore {
    /// Loads the full collection.
    fn load(&self) -> StoreResult<Vec<User>>;
    /// Overwrites storage with the full collection.
    fn save(&mut self, users: &[User]) -> StoreResult<()>;
}
