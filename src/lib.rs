//! Bank Ledger Library
//! # Overview
//!
//! This library provides an interactive, in-memory banking ledger: users,
//! their accounts, and per-account transaction history, with deposit and
//! withdrawal business rules enforced by a transaction engine.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (User, Account, TransactionRecord, etc.)
//! - [`cli`] - CLI argument parsing and the interactive menu loop
//! - [`core`] - Business logic components:
//!   - [`core::identifier`] - Identifier format validation (11 digits)
//!   - [`core::user_registry`] - User storage, duplicate rejection, lookup
//!   - [`core::account_registry`] - Account storage and sequential numbering
//!   - [`core::engine`] - Deposit/withdrawal rules under a withdrawal policy
//!   - [`core::statement`] - Statement and listing rendering
//!
//! # Business Rules
//!
//! Withdrawals are validated in a fixed precedence, first failure wins:
//!
//! 1. Amount exceeds the balance
//! 2. Amount exceeds the per-transaction limit (default 500.00)
//! 3. The withdrawal cap is reached (default 3 per session)
//! 4. Amount is not strictly positive
//!
//! Deposits only require a strictly positive amount. Every failed
//! operation leaves all state unchanged; the transaction log is
//! append-only and the balance always equals the sum of deposits minus
//! the sum of withdrawals.

// Module declarations
pub mod cli;
pub mod core;
pub mod types;

pub use core::{AccountRegistry, TransactionEngine, UserRegistry, WithdrawalPolicy};
pub use types::{Account, AccountNumber, LedgerError, TransactionKind, TransactionRecord, User};
