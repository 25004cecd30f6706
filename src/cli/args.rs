use crate::core::{WithdrawalPolicy, DEFAULT_BRANCH_CODE};
use clap::Parser;
use rust_decimal::Decimal;

/// Interactive in-memory banking ledger
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Interactive in-memory banking ledger", long_about = None)]
pub struct CliArgs {
    /// Maximum amount allowed in a single withdrawal
    #[arg(
        long = "withdrawal-limit",
        value_name = "AMOUNT",
        default_value = "500.00",
        help = "Maximum amount allowed in a single withdrawal"
    )]
    pub withdrawal_limit: Decimal,

    /// Maximum number of successful withdrawals per account
    #[arg(
        long = "max-withdrawals",
        value_name = "COUNT",
        default_value_t = 3,
        help = "Maximum number of successful withdrawals per account"
    )]
    pub max_withdrawals: u32,

    /// Branch code assigned to newly opened accounts
    #[arg(
        long = "branch-code",
        value_name = "CODE",
        default_value = DEFAULT_BRANCH_CODE,
        help = "Branch code assigned to newly opened accounts"
    )]
    pub branch_code: String,
}

impl CliArgs {
    /// Create a WithdrawalPolicy from CLI arguments
    ///
    /// # Returns
    ///
    /// A `WithdrawalPolicy` with the limit and cap taken from the CLI
    /// arguments (or their defaults).
    pub fn to_policy(&self) -> WithdrawalPolicy {
        WithdrawalPolicy {
            per_transaction_limit: self.withdrawal_limit,
            max_withdrawals: self.max_withdrawals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::defaults(&["program"], "500.00", 3, "0001")]
    #[case::custom_limit(&["program", "--withdrawal-limit", "250.50"], "250.50", 3, "0001")]
    #[case::custom_cap(&["program", "--max-withdrawals", "5"], "500.00", 5, "0001")]
    #[case::custom_branch(&["program", "--branch-code", "0042"], "500.00", 3, "0042")]
    #[case::all_custom(
        &["program", "--withdrawal-limit", "1000", "--max-withdrawals", "10", "--branch-code", "0002"],
        "1000",
        10,
        "0002"
    )]
    fn test_argument_parsing(
        #[case] args: &[&str],
        #[case] expected_limit: &str,
        #[case] expected_cap: u32,
        #[case] expected_branch: &str,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();

        assert_eq!(parsed.withdrawal_limit, expected_limit.parse().unwrap());
        assert_eq!(parsed.max_withdrawals, expected_cap);
        assert_eq!(parsed.branch_code, expected_branch);
    }

    #[test]
    fn test_to_policy_carries_cli_values() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--withdrawal-limit",
            "123.45",
            "--max-withdrawals",
            "7",
        ])
        .unwrap();

        let policy = parsed.to_policy();

        assert_eq!(policy.per_transaction_limit, Decimal::new(12345, 2));
        assert_eq!(policy.max_withdrawals, 7);
    }

    #[test]
    fn test_invalid_limit_is_rejected() {
        let result = CliArgs::try_parse_from(["program", "--withdrawal-limit", "abc"]);
        assert!(result.is_err());
    }
}
