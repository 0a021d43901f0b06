//! User domain model.
//!
//! # Responsibility
//! - Define the canonical record shape persisted in the roster file.
//!
//! # Invariants
//! - `id` is stable and never reused for another user.
//! - `name` and `age` are only mutated through validated edit paths.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every user in the roster.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = Uuid;

/// Canonical roster record.
///
/// Serialized as `{"id": ..., "name": ..., "age": ...}` inside the on-disk
/// JSON array; there is no schema version field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable global ID used for auditing and log correlation.
    pub id: UserId,
    /// Display name, restricted to alphabetic characters.
    pub name: String,
    /// Age in years, within the inclusive validation window.
    pub age: u8,
}

impl User {
    /// Creates a new user with a generated stable ID.
    pub fn new(name: impl Into<String>, age: u8) -> Self {
        Self::with_id(Uuid::new_v4(), name, age)
    }

    /// Creates a user with a caller-provided stable ID.
    ///
    /// Used by load and test paths where identity already exists.
    pub fn with_id(id: UserId, name: impl Into<String>, age: u8) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}
