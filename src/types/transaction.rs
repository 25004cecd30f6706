//! Transaction-related types for the bank ledger
//!
//! This module defines the transaction kinds and the immutable records
//! that make up an account's append-only transaction log.

use rust_decimal::Decimal;

/// Account number
///
/// Assigned sequentially at account-opening time, starting at 1.
pub type AccountNumber = u32;

/// Transaction kinds supported by the ledger
///
/// Deposits credit the balance, withdrawals debit it. There are no
/// reversals; a record, once appended, is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    ///
    /// Subject to the balance, per-transaction limit, and withdrawal
    /// count checks enforced by the transaction engine.
    Withdrawal,
}

/// A single entry in an account's transaction log
///
/// Records are appended in chronological order by the transaction engine
/// and are never removed or amended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionRecord {
    /// Whether this entry credited or debited the account
    pub kind: TransactionKind,

    /// The amount applied (always strictly positive)
    pub amount: Decimal,
}
