//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `user`: Registered customer records
//! - `account`: Account state (balance, log, withdrawal count)
//! - `transaction`: Transaction kinds and log records
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;
pub mod transaction;
pub mod user;

pub use account::Account;
pub use error::LedgerError;
pub use transaction::{AccountNumber, TransactionKind, TransactionRecord};
pub use user::User;
