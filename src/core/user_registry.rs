//! User registry
//!
//! This module provides the `UserRegistry` struct which stores registered
//! users keyed by their identifier.
//!
//! The UserRegistry is responsible for:
//! - Validating registration input (non-empty name, well-formed identifier)
//! - Rejecting duplicate identifiers
//! - Lookup by identifier

use crate::core::identifier;
use crate::types::{LedgerError, User};

/// Stores all registered users
///
/// Users are kept in registration order. Identifier uniqueness is an
/// invariant maintained solely by the duplicate check in [`register`];
/// users are never modified or removed once stored.
///
/// [`register`]: UserRegistry::register
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    /// Create a new registry with no users
    pub fn new() -> Self {
        UserRegistry { users: Vec::new() }
    }

    /// Register a new user
    ///
    /// Validates the candidate and appends it to the registry. On any
    /// failure the registry is left unchanged.
    ///
    /// # Arguments
    ///
    /// * `candidate` - The user record to register
    ///
    /// # Returns
    ///
    /// A reference to the stored user on success
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The full name is empty after trimming (`InvalidInput`)
    /// - The identifier is not exactly 11 digits (`InvalidInput`)
    /// - A user with the same identifier already exists (`AlreadyExists`)
    pub fn register(&mut self, candidate: User) -> Result<&User, LedgerError> {
        if candidate.full_name.trim().is_empty() {
            return Err(LedgerError::invalid_input("full name is required"));
        }

        if !identifier::validate(&candidate.identifier) {
            return Err(LedgerError::invalid_input(
                "identifier must be exactly 11 digits",
            ));
        }

        if self.find_by_identifier(&candidate.identifier).is_some() {
            return Err(LedgerError::already_exists(&candidate.identifier));
        }

        self.users.push(candidate);
        Ok(&self.users[self.users.len() - 1])
    }

    /// Look up a user by identifier
    ///
    /// Returns the unique match, or `None` if no user with that
    /// identifier is registered.
    pub fn find_by_identifier(&self, identifier: &str) -> Option<&User> {
        self.users.iter().find(|user| user.identifier == identifier)
    }

    /// All registered users in registration order
    pub fn all(&self) -> &[User] {
        &self.users
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
