//! Statement and listing rendering
//!
//! Pure string projections of ledger state for display. Nothing here
//! mutates or validates; the menu layer decides where the text goes.

use crate::types::{Account, TransactionKind, User};
use std::fmt::Write;

/// Notice shown when an account has no transactions yet
pub const NO_MOVEMENTS_NOTICE: &str = "No movements recorded.";

/// Render an account statement
///
/// Lists every transaction in chronological (append) order with its kind
/// and amount, followed by the current balance, all with two decimal
/// places. An empty log renders the fixed [`NO_MOVEMENTS_NOTICE`] instead.
pub fn render(account: &Account) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=============== STATEMENT ===============");

    if account.transactions.is_empty() {
        let _ = writeln!(out, "{}", NO_MOVEMENTS_NOTICE);
    } else {
        for record in &account.transactions {
            let label = match record.kind {
                TransactionKind::Deposit => "Deposit:",
                TransactionKind::Withdrawal => "Withdrawal:",
            };
            let _ = writeln!(out, "{:<11} $ {:.2}", label, record.amount);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Balance:    $ {:.2}", account.balance);
    let _ = writeln!(out, "=========================================");
    out
}

/// Render the account listing for the "list accounts" menu action
pub fn render_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts registered.\n".to_string();
    }

    let mut out = String::new();
    for account in accounts {
        let _ = writeln!(out, "{}", "=".repeat(41));
        let _ = writeln!(out, "Branch:  {}", account.branch_code);
        let _ = writeln!(out, "Account: {}", account.number);
        let _ = writeln!(out, "Holder:  {}", account.owner.full_name);
    }
    out
}

/// Render the user listing for the "list users" menu action
pub fn render_user_list(users: &[User]) -> String {
    if users.is_empty() {
        return "No users registered.\n".to_string();
    }

    let mut out = String::new();
    for user in users {
        let _ = writeln!(out, "{}", "=".repeat(41));
        let _ = writeln!(out, "Identifier: {}", user.identifier);
        let _ = writeln!(out, "Name:       {}", user.full_name);
    }
    out
}
