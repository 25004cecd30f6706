//! Identifier format validation
//!
//! A user identifier is a fixed-length numeric string (11 decimal digits),
//! analogous to a national tax ID. Validation reports format validity only;
//! callers decide how to surface a rejection, and must not proceed to
//! register or search with an identifier that failed validation.

/// Required identifier length in digits
pub const IDENTIFIER_LENGTH: usize = 11;

/// Check whether an identifier is well-formed
///
/// Valid iff the string is exactly [`IDENTIFIER_LENGTH`] characters long
/// and every character is a decimal digit. Pure, no side effects.
pub fn validate(identifier: &str) -> bool {
    identifier.len() == IDENTIFIER_LENGTH && identifier.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::valid("12345678901", true)]
    #[case::all_zeros("00000000000", true)]
    #[case::too_short("1234567890", false)]
    #[case::too_long("123456789012", false)]
    #[case::empty("", false)]
    #[case::letters("1234567890a", false)]
    #[case::punctuation("123.456.789", false)]
    #[case::whitespace("12345 78901", false)]
    #[case::non_ascii_digits("１２３４５６７８９０１", false)]
    fn test_validate(#[case] identifier: &str, #[case] expected: bool) {
        assert_eq!(validate(identifier), expected);
    }
}
