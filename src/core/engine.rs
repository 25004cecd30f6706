//! Transaction processing engine
//!
//! This module provides the TransactionEngine that applies deposits and
//! withdrawals to an account's balance and log under the business rules.
//!
//! The engine enforces:
//! - Strictly positive amounts for deposits
//! - The withdrawal checks (balance, per-transaction limit, withdrawal
//!   count, positivity) in a fixed precedence, first match wins
//! - Append-only transaction logging

use crate::types::{Account, LedgerError, TransactionKind, TransactionRecord};
use rust_decimal::Decimal;
use tracing::debug;

/// Withdrawal policy limits
///
/// Both limits are configuration, not engine logic: the engine receives a
/// policy at construction time and never hardcodes the values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithdrawalPolicy {
    /// Maximum amount allowed in a single withdrawal
    pub per_transaction_limit: Decimal,

    /// Maximum number of successful withdrawals per account
    ///
    /// The count never resets during the life of the process.
    pub max_withdrawals: u32,
}

impl Default for WithdrawalPolicy {
    /// Default policy: 500.00 per withdrawal, 3 withdrawals
    fn default() -> Self {
        WithdrawalPolicy {
            per_transaction_limit: Decimal::new(50000, 2),
            max_withdrawals: 3,
        }
    }
}

/// Applies deposits and withdrawals to accounts
///
/// Pure, synchronous, single-shot validations with no external I/O. Every
/// failed operation leaves the account completely unchanged.
pub struct TransactionEngine {
    policy: WithdrawalPolicy,
}

impl TransactionEngine {
    /// Create an engine with the given withdrawal policy
    pub fn new(policy: WithdrawalPolicy) -> Self {
        TransactionEngine { policy }
    }

    /// The policy this engine enforces
    pub fn policy(&self) -> &WithdrawalPolicy {
        &self.policy
    }

    /// Deposit funds into an account
    ///
    /// Increases the balance by `amount` and appends a Deposit record to
    /// the transaction log.
    ///
    /// # Arguments
    ///
    /// * `account` - The account to credit
    /// * `amount` - The amount to deposit
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if `amount` is not strictly positive; the
    /// account is unchanged.
    pub fn deposit(&self, account: &mut Account, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }

        account.balance += amount;
        account.transactions.push(TransactionRecord {
            kind: TransactionKind::Deposit,
            amount,
        });

        debug!(
            account = account.number,
            %amount,
            balance = %account.balance,
            "deposit applied"
        );
        Ok(())
    }

    /// Withdraw funds from an account
    ///
    /// Decreases the balance by `amount`, appends a Withdrawal record to
    /// the transaction log, and increments the withdrawal count.
    ///
    /// Checks are evaluated in a fixed precedence, first match wins:
    /// balance, then per-transaction limit, then withdrawal count, then
    /// positivity. A non-positive amount that also exceeds the balance or
    /// a limit therefore reports the balance/limit failure, not
    /// InvalidAmount. Callers depend on this precedence; do not reorder
    /// the checks.
    ///
    /// # Arguments
    ///
    /// * `account` - The account to debit
    /// * `amount` - The amount to withdraw
    ///
    /// # Errors
    ///
    /// Returns the first failing check, leaving the account unchanged:
    /// - `InsufficientBalance` if `amount` exceeds the balance
    /// - `LimitExceeded` if `amount` exceeds the per-transaction limit
    /// - `WithdrawalCountExceeded` if the withdrawal cap is reached
    /// - `InvalidAmount` if `amount` is not strictly positive
    pub fn withdraw(&self, account: &mut Account, amount: Decimal) -> Result<(), LedgerError> {
        if amount > account.balance {
            return Err(LedgerError::insufficient_balance(account.balance, amount));
        }

        if amount > self.policy.per_transaction_limit {
            return Err(LedgerError::limit_exceeded(
                self.policy.per_transaction_limit,
                amount,
            ));
        }

        if account.withdrawal_count >= self.policy.max_withdrawals {
            return Err(LedgerError::withdrawal_count_exceeded(
                self.policy.max_withdrawals,
            ));
        }

        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }

        account.balance -= amount;
        account.transactions.push(TransactionRecord {
            kind: TransactionKind::Withdrawal,
            amount,
        });
        account.withdrawal_count += 1;

        debug!(
            account = account.number,
            %amount,
            balance = %account.balance,
            withdrawals = account.withdrawal_count,
            "withdrawal applied"
        );
        Ok(())
    }
}

impl Default for TransactionEngine {
    fn default() -> Self {
        Self::new(WithdrawalPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::User;
    use rstest::rstest;

    fn test_account() -> Account {
        Account::new(
            "0001",
            1,
            User::new("Ana Lima", "20-07-1992", "12345678901", "Rua A, 1"),
        )
    }

    fn dec(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn test_deposit_increases_balance_and_appends_record() {
        let engine = TransactionEngine::default();
        let mut account = test_account();

        engine.deposit(&mut account, dec(10000)).unwrap();

        assert_eq!(account.balance, dec(10000));
        assert_eq!(
            account.transactions,
            vec![TransactionRecord {
                kind: TransactionKind::Deposit,
                amount: dec(10000),
            }]
        );
    }

    #[rstest]
    #[case::zero(dec(0))]
    #[case::negative(dec(-100))]
    fn test_deposit_non_positive_amount_is_rejected(#[case] amount: Decimal) {
        let engine = TransactionEngine::default();
        let mut account = test_account();

        let result = engine.deposit(&mut account, amount);

        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
        assert_eq!(account.balance, Decimal::ZERO);
        assert!(account.transactions.is_empty());
    }

    #[test]
    fn test_withdraw_decreases_balance_and_counts() {
        let engine = TransactionEngine::default();
        let mut account = test_account();
        engine.deposit(&mut account, dec(10000)).unwrap();

        engine.withdraw(&mut account, dec(5000)).unwrap();

        assert_eq!(account.balance, dec(5000));
        assert_eq!(account.withdrawal_count, 1);
        assert_eq!(account.transactions.len(), 2);
        assert_eq!(
            account.transactions[1],
            TransactionRecord {
                kind: TransactionKind::Withdrawal,
                amount: dec(5000),
            }
        );
    }

    #[test]
    fn test_withdraw_more_than_balance_fails() {
        let engine = TransactionEngine::default();
        let mut account = test_account();
        engine.deposit(&mut account, dec(5000)).unwrap();

        let result = engine.withdraw(&mut account, dec(100000));

        assert!(matches!(
            result,
            Err(LedgerError::InsufficientBalance { .. })
        ));
        assert_eq!(account.balance, dec(5000));
        assert_eq!(account.withdrawal_count, 0);
    }

    #[test]
    fn test_withdraw_over_per_transaction_limit_fails() {
        let engine = TransactionEngine::default();
        let mut account = test_account();
        engine.deposit(&mut account, dec(100000)).unwrap();

        let result = engine.withdraw(&mut account, dec(60000));

        assert!(matches!(result, Err(LedgerError::LimitExceeded { .. })));
        assert_eq!(account.balance, dec(100000));
    }

    #[test]
    fn test_withdraw_cap_rejects_fourth_withdrawal() {
        let engine = TransactionEngine::default();
        let mut account = test_account();
        engine.deposit(&mut account, dec(100000)).unwrap();

        for _ in 0..3 {
            engine.withdraw(&mut account, dec(3000)).unwrap();
        }

        let result = engine.withdraw(&mut account, dec(3000));

        assert!(matches!(
            result,
            Err(LedgerError::WithdrawalCountExceeded { .. })
        ));
        assert_eq!(account.withdrawal_count, 3);
        assert_eq!(account.balance, dec(91000));
    }

    #[rstest]
    #[case::zero(dec(0))]
    #[case::negative(dec(-100))]
    fn test_withdraw_non_positive_amount_is_rejected(#[case] amount: Decimal) {
        let engine = TransactionEngine::default();
        let mut account = test_account();
        engine.deposit(&mut account, dec(10000)).unwrap();

        let result = engine.withdraw(&mut account, amount);

        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
        assert_eq!(account.balance, dec(10000));
        assert_eq!(account.withdrawal_count, 0);
    }

    #[test]
    fn test_check_precedence_balance_before_positivity() {
        // A positive amount over the balance on an empty account must
        // report InsufficientBalance even though the limit would also fail.
        let engine = TransactionEngine::default();
        let mut account = test_account();
        engine.deposit(&mut account, dec(5000)).unwrap();

        let result = engine.withdraw(&mut account, dec(100000));
        assert!(matches!(
            result,
            Err(LedgerError::InsufficientBalance { .. })
        ));
    }

    #[test]
    fn test_check_precedence_limit_before_count() {
        let engine = TransactionEngine::new(WithdrawalPolicy {
            per_transaction_limit: dec(50000),
            max_withdrawals: 0,
        });
        let mut account = test_account();
        engine.deposit(&mut account, dec(100000)).unwrap();

        // Over the limit and over the (zero) cap: limit wins.
        let result = engine.withdraw(&mut account, dec(60000));
        assert!(matches!(result, Err(LedgerError::LimitExceeded { .. })));

        // Within the limit: the cap is reported.
        let result = engine.withdraw(&mut account, dec(1000));
        assert!(matches!(
            result,
            Err(LedgerError::WithdrawalCountExceeded { .. })
        ));
    }

    #[test]
    fn test_check_precedence_count_before_positivity() {
        let engine = TransactionEngine::new(WithdrawalPolicy {
            per_transaction_limit: dec(50000),
            max_withdrawals: 0,
        });
        let mut account = test_account();
        engine.deposit(&mut account, dec(10000)).unwrap();

        // Zero is non-positive, but the exhausted cap is reported first.
        let result = engine.withdraw(&mut account, dec(0));
        assert!(matches!(
            result,
            Err(LedgerError::WithdrawalCountExceeded { .. })
        ));
    }

    #[test]
    fn test_balance_equals_deposits_minus_withdrawals() {
        let engine = TransactionEngine::default();
        let mut account = test_account();

        engine.deposit(&mut account, dec(20000)).unwrap();
        engine.deposit(&mut account, dec(3550)).unwrap();
        engine.withdraw(&mut account, dec(7025)).unwrap();
        engine.withdraw(&mut account, dec(1000)).unwrap();

        let deposits: Decimal = account
            .transactions
            .iter()
            .filter(|record| record.kind == TransactionKind::Deposit)
            .map(|record| record.amount)
            .sum();
        let withdrawals: Decimal = account
            .transactions
            .iter()
            .filter(|record| record.kind == TransactionKind::Withdrawal)
            .map(|record| record.amount)
            .sum();

        assert_eq!(account.balance, deposits - withdrawals);
        assert_eq!(account.balance, dec(15525));
    }

    #[test]
    fn test_custom_policy_is_honored() {
        let engine = TransactionEngine::new(WithdrawalPolicy {
            per_transaction_limit: dec(10000),
            max_withdrawals: 1,
        });
        let mut account = test_account();
        engine.deposit(&mut account, dec(50000)).unwrap();

        assert!(matches!(
            engine.withdraw(&mut account, dec(15000)),
            Err(LedgerError::LimitExceeded { .. })
        ));
        engine.withdraw(&mut account, dec(10000)).unwrap();
        assert!(matches!(
            engine.withdraw(&mut account, dec(100)),
            Err(LedgerError::WithdrawalCountExceeded { .. })
        ));
    }
}
