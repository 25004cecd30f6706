//! Account-related types for the bank ledger
//!
//! This module defines the Account structure holding a customer's balance,
//! transaction log, and withdrawal count.

use super::transaction::{AccountNumber, TransactionRecord};
use super::user::User;
use rust_decimal::Decimal;

/// A customer account
///
/// Holds the current balance, the append-only transaction log, and the
/// number of withdrawals applied so far. All mutation goes through the
/// transaction engine; the registries only create and look up accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Branch code this account belongs to ("0001" by default)
    pub branch_code: String,

    /// Sequential account number, unique within the registry
    pub number: AccountNumber,

    /// The registered user who owns this account
    ///
    /// Users are immutable after registration, so the account keeps its
    /// own copy taken at opening time.
    pub owner: User,

    /// Current balance
    ///
    /// Always equals the sum of all deposit amounts minus the sum of all
    /// withdrawal amounts ever successfully applied.
    pub balance: Decimal,

    /// Append-only transaction log in chronological order
    pub transactions: Vec<TransactionRecord>,

    /// Number of successfully applied withdrawals
    ///
    /// Never reset during the life of the process; the withdrawal cap is
    /// therefore a session-lifetime cap.
    pub withdrawal_count: u32,
}

impl Account {
    /// Create a new account with zero balance and an empty log
    ///
    /// # Arguments
    ///
    /// * `branch_code` - Branch code for the new account
    /// * `number` - Account number assigned by the registry
    /// * `owner` - The registered user who owns the account
    pub fn new(branch_code: impl Into<String>, number: AccountNumber, owner: User) -> Self {
        Account {
            branch_code: branch_code.into(),
            number,
            owner,
            balance: Decimal::ZERO,
            transactions: Vec::new(),
            withdrawal_count: 0,
        }
    }
}
