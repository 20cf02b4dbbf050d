//! Account-related types for the ledger engine
//!
//! An account is a named signed-integer balance persisted in the key-value
//! store as exact decimal text under the account name as key.

use super::error::LedgerError;

/// Account name, used verbatim as the store key
pub type AccountName = String;

/// Account balance
///
/// Signed: negative balances can be written with `set`, and `earn` accepts
/// negative amounts as debits. Only `transfer` and `earn` enforce
/// non-negativity conditions, at mutation time.
pub type Balance = i64;

/// Result of looking up an account's balance in the store
///
/// Absence and corruption are distinct states, so callers can never
/// silently treat a missing or garbled balance as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceLookup {
    /// Balance present and valid integer text
    Found(Balance),

    /// No value stored under the account name
    Absent,

    /// A value is stored but is not valid integer text
    ///
    /// Carries the lossy-decoded raw bytes for diagnostics.
    Corrupt(String),
}

impl BalanceLookup {
    /// Classify raw store output for an account
    ///
    /// `None` is absence; present bytes must be the exact decimal text of an
    /// `i64` (no leading/trailing garbage) to count as a valid balance.
    pub fn from_raw(raw: Option<&[u8]>) -> Self {
        match raw {
            None => BalanceLookup::Absent,
            Some(bytes) => match std::str::from_utf8(bytes) {
                Ok(text) => match text.parse::<Balance>() {
                    Ok(balance) => BalanceLookup::Found(balance),
                    Err(_) => BalanceLookup::Corrupt(text.to_string()),
                },
                Err(_) => BalanceLookup::Corrupt(String::from_utf8_lossy(bytes).into_owned()),
            },
        }
    }

    /// Require a valid balance, converting the other states to errors
    ///
    /// Absent becomes `AccountNotFound`, Corrupt becomes `StateCorruption`.
    pub fn require(self, name: &str) -> Result<Balance, LedgerError> {
        match self {
            BalanceLookup::Found(balance) => Ok(balance),
            BalanceLookup::Absent => Err(LedgerError::account_not_found(name)),
            BalanceLookup::Corrupt(raw) => Err(LedgerError::StateCorruption {
                name: name.to_string(),
                raw,
            }),
        }
    }
}

/// Encode a balance as the decimal text bytes stored under the account key
pub fn encode_balance(balance: Balance) -> Vec<u8> {
    balance.to_string().into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::positive(b"1000".as_slice(), BalanceLookup::Found(1000))]
    #[case::zero(b"0".as_slice(), BalanceLookup::Found(0))]
    #[case::negative(b"-42".as_slice(), BalanceLookup::Found(-42))]
    #[case::i64_max(b"9223372036854775807".as_slice(), BalanceLookup::Found(i64::MAX))]
    #[case::i64_min(b"-9223372036854775808".as_slice(), BalanceLookup::Found(i64::MIN))]
    fn test_from_raw_valid_balances(#[case] raw: &[u8], #[case] expected: BalanceLookup) {
        assert_eq!(BalanceLookup::from_raw(Some(raw)), expected);
    }

    #[rstest]
    #[case::empty(b"".as_slice())]
    #[case::non_numeric(b"abc".as_slice())]
    #[case::trailing_garbage(b"100x".as_slice())]
    #[case::leading_whitespace(b" 100".as_slice())]
    #[case::decimal_point(b"10.5".as_slice())]
    #[case::overflow(b"9223372036854775808".as_slice())]
    fn test_from_raw_corrupt_values(#[case] raw: &[u8]) {
        assert!(matches!(
            BalanceLookup::from_raw(Some(raw)),
            BalanceLookup::Corrupt(_)
        ));
    }

    #[test]
    fn test_from_raw_absent() {
        assert_eq!(BalanceLookup::from_raw(None), BalanceLookup::Absent);
    }

    #[test]
    fn test_from_raw_invalid_utf8_is_corrupt() {
        let lookup = BalanceLookup::from_raw(Some(&[0xff, 0x30]));
        assert!(matches!(lookup, BalanceLookup::Corrupt(_)));
    }

    #[test]
    fn test_require_found_returns_balance() {
        assert_eq!(BalanceLookup::Found(700).require("alice"), Ok(700));
    }

    #[test]
    fn test_require_absent_is_not_found() {
        let err = BalanceLookup::Absent.require("alice").unwrap_err();
        assert_eq!(err, LedgerError::account_not_found("alice"));
    }

    #[test]
    fn test_require_corrupt_is_state_corruption() {
        let err = BalanceLookup::Corrupt("12x".to_string())
            .require("alice")
            .unwrap_err();
        assert!(matches!(err, LedgerError::StateCorruption { .. }));
    }

    #[rstest]
    #[case(1000, b"1000".as_slice())]
    #[case(0, b"0".as_slice())]
    #[case(-7, b"-7".as_slice())]
    fn test_encode_balance(#[case] balance: Balance, #[case] expected: &[u8]) {
        assert_eq!(encode_balance(balance), expected);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let encoded = encode_balance(-123456789);
        assert_eq!(
            BalanceLookup::from_raw(Some(&encoded)),
            BalanceLookup::Found(-123456789)
        );
    }
}
