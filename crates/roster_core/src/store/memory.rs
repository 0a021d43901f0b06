//! In-memory roster storage for tests.
//!
//! # Responsibility
//! - Provide a filesystem-free `UserStore` with an observable buffer.

use super::{StoreResult, UserStore};
use crate::model::user::User;
use std::cell::RefCell;
use std::rc::Rc;

/// Volatile store sharing its buffer across cloned handles.
///
/// Cloning is shallow: a test keeps one handle, hands the other to a
/// session, and can then observe what was saved.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    users: Rc<RefCell<Vec<User>>>,
}

impl InMemoryStore {
    /// Creates a store pre-seeded with `users`.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Rc::new(RefCell::new(users)),
        }
    }

    /// Returns a copy of the last saved collection.
    pub fn snapshot(&self) -> Vec<User> {
        self.users.borrow().clone()
    }
}

impl UserStore for InMemoryStore {
    fn load(&self) -> StoreResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }

    fn save(&mut self, users: &[User]) -> StoreResult<()> {
        *self.users.borrow_mut() = users.to_vec();
        Ok(())
    }
}
