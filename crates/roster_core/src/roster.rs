//! Roster session state and CRUD operations.
//!
//! # Responsibility
//! - Own the in-memory collection for one interactive session.
//! - Keep the collection and the backing store in lock-step on mutation.
//!
//! # Invariants
//! - Every successful mutation is followed by a whole-store save.
//! - A failed save leaves memory ahead of disk; no rollback is attempted.
//! - `User::id` never changes after creation; edits touch name and age only.

use crate::model::user::{User, UserId};
use crate::model::validate::{validate_age, validate_name, ValidationError};
use crate::store::{StoreError, UserStore};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RosterResult<T> = Result<T, RosterError>;

/// Operation error for roster mutations and lookups.
#[derive(Debug)]
pub enum RosterError {
    Validation(ValidationError),
    Store(StoreError),
    NotFound(String),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::NotFound(name) => write!(f, "no user named `{name}`"),
        }
    }
}

impl Error for RosterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ValidationError> for RosterError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RosterError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Session-owned collection bound to one storage backend.
#[derive(Debug)]
pub struct Roster<S: UserStore> {
    store: S,
    users: Vec<User>,
}

impl<S: UserStore> Roster<S> {
    /// Loads the full collection from `store` and holds it for the session.
    pub fn open(store: S) -> RosterResult<Self> {
        let users = store.load()?;
        Ok(Self { store, users })
    }

    /// Returns the collection in its current in-memory order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Names in scan order, for selection menus.
    pub fn names(&self) -> Vec<String> {
        self.users.iter().map(|user| user.name.clone()).collect()
    }

    /// First record whose name exactly equals `name`, by scan order.
    ///
    /// Duplicate names resolve to the earliest entry.
    pub fn find_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|user| user.name == name)
    }

    /// Validates both inputs, assigns a fresh ID, appends and persists.
    pub fn add(&mut self, name: &str, age: &str) -> RosterResult<UserId> {
        validate_name(name)?;
        let age = validate_age(age)?;

        let user = User::new(name, age);
        let id = user.id;
        self.users.push(user);
        self.persist()?;

        info!("event=user_add module=roster status=ok id={id}");
        Ok(id)
    }

    /// Sorts the shared collection ascending by name and returns it.
    ///
    /// The sort is case-sensitive lexicographic and mutates session order in
    /// place, so later operations observe it. Nothing is persisted.
    pub fn list(&mut self) -> &[User] {
        self.users.sort_by(|a, b| a.name.cmp(&b.name));
        &self.users
    }

    /// Replaces name and age of the first record matching `name`.
    ///
    /// The record keeps its ID and collection position.
    pub fn edit(&mut self, name: &str, new_name: &str, new_age: &str) -> RosterResult<UserId> {
        validate_name(new_name)?;
        let new_age = validate_age(new_age)?;

        let index = self
            .index_of(name)
            .ok_or_else(|| RosterError::NotFound(name.to_string()))?;
        self.users[index].name = new_name.to_string();
        self.users[index].age = new_age;
        let id = self.users[index].id;
        self.persist()?;

        info!("event=user_edit module=roster status=ok id={id}");
        Ok(id)
    }

    /// Removes the first record matching `name` and returns it.
    pub fn remove(&mut self, name: &str) -> RosterResult<User> {
        let index = self
            .index_of(name)
            .ok_or_else(|| RosterError::NotFound(name.to_string()))?;
        let removed = self.users.remove(index);
        self.persist()?;

        info!("event=user_remove module=roster status=ok id={}", removed.id);
        Ok(removed)
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.users.iter().position(|user| user.name == name)
    }

    fn persist(&mut self) -> RosterResult<()> {
        self.store.save(&self.users)?;
        Ok(())
    }
}
