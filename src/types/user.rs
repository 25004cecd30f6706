//! User-related types for the bank ledger
//!
//! This module defines the User structure representing a registered
//! customer. Users are created once via registration and are immutable
//! thereafter; identity is the 11-digit identifier.

/// A registered customer
///
/// Identity is the `identifier` field; the user registry guarantees that
/// no two users share an identifier. Users are never modified or deleted
/// after registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Full legal name (non-empty after trimming)
    pub full_name: String,

    /// Date of birth, kept as entered (dd-mm-yyyy)
    pub date_of_birth: String,

    /// Unique 11-digit identifier (analogous to a national tax ID)
    pub identifier: String,

    /// Postal address, kept as entered
    pub address: String,
}

impl User {
    /// Create a new user record
    ///
    /// This only assembles the record; format and uniqueness checks are
    /// performed by [`crate::core::UserRegistry::register`].
    pub fn new(
        full_name: impl Into<String>,
        date_of_birth: impl Into<String>,
        identifier: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        User {
            full_name: full_name.into(),
            date_of_birth: date_of_birth.into(),
            identifier: identifier.into(),
            address: address.into(),
        }
    }
}
