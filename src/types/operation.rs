//! Operation types for the invocation surface
//!
//! Function names arrive as strings from the host; they are parsed once into
//! the `Operation` enum and routed from there, replacing the original chain
//! of string comparisons with enum-keyed dispatch.

use super::error::LedgerError;
use std::fmt;
use std::str::FromStr;

/// Operations supported by the ledger engine
///
/// `Init`, `Transfer`, `Earn` and `Set` mutate state and are served by the
/// invoke path; `Balance` is read-only and served by the query path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Seed two named accounts with balance 1000 each
    Init,

    /// Move a non-negative amount from one account to another
    ///
    /// Both balances are persisted through a single atomic multi-key write.
    Transfer,

    /// Adjust an account by a signed amount
    ///
    /// Negative amounts are debits; the result may not go below zero.
    Earn,

    /// Overwrite an account balance unconditionally
    ///
    /// No read of the prior value and no sign check.
    Set,

    /// Read an account's raw stored balance
    Balance,
}

impl Operation {
    /// Whether this operation mutates ledger state
    ///
    /// Mutating operations are served by `invoke`, read-only ones by `query`.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Operation::Balance)
    }

    /// The wire name of this operation
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Init => "init",
            Operation::Transfer => "transfer",
            Operation::Earn => "earn",
            Operation::Set => "set",
            Operation::Balance => "balance",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "init" => Ok(Operation::Init),
            "transfer" => Ok(Operation::Transfer),
            "earn" => Ok(Operation::Earn),
            "set" => Ok(Operation::Set),
            "balance" => Ok(Operation::Balance),
            _ => Err(LedgerError::unknown_operation(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("init", Operation::Init)]
    #[case("transfer", Operation::Transfer)]
    #[case("earn", Operation::Earn)]
    #[case("set", Operation::Set)]
    #[case("balance", Operation::Balance)]
    fn test_from_str_known_names(#[case] name: &str, #[case] expected: Operation) {
        assert_eq!(name.parse::<Operation>().unwrap(), expected);
    }

    // "set" must parse to Set, not Earn: the original dispatcher's
    // set-to-earn routing was a defect, not a contract.
    #[test]
    fn test_set_parses_to_set_not_earn() {
        assert_eq!("set".parse::<Operation>().unwrap(), Operation::Set);
    }

    #[rstest]
    #[case("mint")]
    #[case("INIT")]
    #[case("")]
    #[case("balance ")]
    fn test_from_str_unknown_names(#[case] name: &str) {
        let err = name.parse::<Operation>().unwrap_err();
        assert_eq!(err, LedgerError::unknown_operation(name));
    }

    #[test]
    fn test_name_round_trips() {
        for op in [
            Operation::Init,
            Operation::Transfer,
            Operation::Earn,
            Operation::Set,
            Operation::Balance,
        ] {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_only_balance_is_a_query() {
        assert!(!Operation::Balance.is_mutation());
        assert!(Operation::Init.is_mutation());
        assert!(Operation::Transfer.is_mutation());
        assert!(Operation::Earn.is_mutation());
        assert!(Operation::Set.is_mutation());
    }
}
