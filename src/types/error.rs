//! Error types for the bank ledger
//!
//! This module defines all error types that can occur during registration,
//! account opening, and transaction processing. Errors are designed to be
//! descriptive and user-friendly for CLI output.
//!
//! Every error is recoverable: a failed operation leaves all registries and
//! accounts unchanged, and the caller reports the message and carries on.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank ledger
///
/// This enum represents all possible errors that can occur during ledger
/// operations. Each variant includes relevant context to help diagnose
/// and report the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// A user-supplied field failed validation
    ///
    /// Covers an empty full name and a malformed identifier at
    /// registration time.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the rejected input
        message: String,
    },

    /// A user with this identifier is already registered
    #[error("A user with identifier {identifier} already exists")]
    AlreadyExists {
        /// The duplicate identifier
        identifier: String,
    },

    /// No registered user matches this identifier
    ///
    /// Raised when opening an account for an unknown owner.
    #[error("No user found with identifier {identifier}")]
    UserNotFound {
        /// The identifier that was not found
        identifier: String,
    },

    /// Transaction amount is not strictly positive
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal amount exceeds the account balance
    #[error("Insufficient balance: balance {balance}, requested {requested}")]
    InsufficientBalance {
        /// Current balance
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Withdrawal amount exceeds the per-transaction limit
    #[error("Withdrawal of {requested} exceeds the per-transaction limit of {limit}")]
    LimitExceeded {
        /// The configured per-transaction limit
        limit: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// The account has reached its withdrawal cap
    #[error("Maximum of {max_withdrawals} withdrawals reached")]
    WithdrawalCountExceeded {
        /// The configured withdrawal cap
        max_withdrawals: u32,
    },
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidInput error
    pub fn invalid_input(message: &str) -> Self {
        LedgerError::InvalidInput {
            message: message.to_string(),
        }
    }

    /// Create an AlreadyExists error
    pub fn already_exists(identifier: &str) -> Self {
        LedgerError::AlreadyExists {
            identifier: identifier.to_string(),
        }
    }

    /// Create a UserNotFound error
    pub fn user_not_found(identifier: &str) -> Self {
        LedgerError::UserNotFound {
            identifier: identifier.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientBalance { balance, requested }
    }

    /// Create a LimitExceeded error
    pub fn limit_exceeded(limit: Decimal, requested: Decimal) -> Self {
        LedgerError::LimitExceeded { limit, requested }
    }

    /// Create a WithdrawalCountExceeded error
    pub fn withdrawal_count_exceeded(max_withdrawals: u32) -> Self {
        LedgerError::WithdrawalCountExceeded { max_withdrawals }
    }
}
