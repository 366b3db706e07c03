//! # User Registry
//!
//! The in-memory set of registered users.
//!
//! ## Identity
//! The registry stores user *values*, not id-keyed entries: registering
//! two users with the same id is allowed and keeps both. `find_by_id`
//! resolves to the first match in insertion order.

use crate::error::{CoreError, CoreResult};
use crate::types::User;

/// The in-memory user registry for one run.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        UserRegistry { users: Vec::new() }
    }

    /// Registers a user.
    ///
    /// No dedup of any kind: duplicates by id (or by full value) are
    /// permitted. Users are never deleted for the lifetime of the run.
    pub fn add(&mut self, user: User) {
        self.users.push(user);
    }

    /// Returns the first registered user with the given id.
    ///
    /// ## Errors
    /// `CoreError::UserNotFound` when no user has that id. Unlike a
    /// catalog miss, this is a hard failure: a bill cannot be finalized
    /// for a user that was never registered.
    pub fn find_by_id(&self, id: &str) -> CoreResult<&User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| CoreError::UserNotFound(id.to_string()))
    }

    /// Iterates over all registered users, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Checks if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
