//! Core business logic module
//!
//! This module contains the ledger's core components:
//! - `identifier` - Identifier format validation
//! - `user_registry` - User storage and lookup
//! - `account_registry` - Account storage, numbering, and lookup
//! - `engine` - Deposit/withdrawal rules
//! - `statement` - Statement and listing rendering

pub mod account_registry;
pub mod engine;
pub mod identifier;
pub mod statement;
pub mod user_registry;

pub use account_registry::{AccountRegistry, DEFAULT_BRANCH_CODE};
pub use engine::{TransactionEngine, WithdrawalPolicy};
pub use user_registry::UserRegistry;
