//! Account registry
//!
//! This module provides the `AccountRegistry` struct which stores all open
//! accounts and assigns sequential account numbers.
//!
//! The AccountRegistry is responsible for:
//! - Opening accounts for registered users only
//! - Assigning account numbers in creation order, starting at 1
//! - Lookup by the owning user's identifier
//! - Read-only enumeration for display

use crate::core::user_registry::UserRegistry;
use crate::types::{Account, AccountNumber, LedgerError};

/// Default branch code for newly opened accounts
pub const DEFAULT_BRANCH_CODE: &str = "0001";

/// Stores all open accounts
///
/// Accounts are kept in creation order; the account number of the next
/// account is always the current count plus one. Accounts are never
/// removed, so numbers are unique and dense.
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    /// Create a new registry with no accounts
    pub fn new() -> Self {
        AccountRegistry {
            accounts: Vec::new(),
        }
    }

    /// Open a new account for a registered user
    ///
    /// Resolves the owner through the user registry and, on success,
    /// appends a fresh account with zero balance, an empty transaction
    /// log, and a zero withdrawal count. On failure no account is created.
    ///
    /// # Arguments
    ///
    /// * `branch_code` - Branch code for the new account
    /// * `owner_identifier` - Identifier of the registered owner
    /// * `users` - The user registry to resolve the owner against
    ///
    /// # Returns
    ///
    /// A reference to the newly opened account on success
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if no user with `owner_identifier` is
    /// registered.
    pub fn open_account(
        &mut self,
        branch_code: &str,
        owner_identifier: &str,
        users: &UserRegistry,
    ) -> Result<&Account, LedgerError> {
        let owner = users
            .find_by_identifier(owner_identifier)
            .ok_or_else(|| LedgerError::user_not_found(owner_identifier))?;

        let number = self.next_account_number();
        self.accounts
            .push(Account::new(branch_code, number, owner.clone()));
        Ok(&self.accounts[self.accounts.len() - 1])
    }

    /// Look up an account by its owner's identifier
    ///
    /// Returns the first account whose owner matches, in creation order,
    /// or `None` if the user has no account.
    pub fn find_by_owner_identifier(&self, identifier: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.owner.identifier == identifier)
    }

    /// Mutable variant of [`find_by_owner_identifier`] for transaction paths
    ///
    /// [`find_by_owner_identifier`]: AccountRegistry::find_by_owner_identifier
    pub fn find_by_owner_identifier_mut(&mut self, identifier: &str) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.owner.identifier == identifier)
    }

    /// All open accounts in creation order
    pub fn list_all(&self) -> &[Account] {
        &self.accounts
    }

    /// Number of open accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn next_account_number(&self) -> AccountNumber {
        self.accounts.len() as AccountNumber + 1
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}
