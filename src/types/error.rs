//! Error types for the ledger engine
//!
//! This module defines all error types that can occur while dispatching and
//! executing ledger operations. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Invalid-argument errors**: wrong arity, non-integer amount text, empty names
//! - **State errors**: account absent, stored value not a valid integer
//! - **Business-rule errors**: insufficient funds
//! - **Store errors**: the underlying key-value store failed
//! - **Dispatch errors**: unknown function name

use thiserror::Error;

/// Main error type for the ledger engine
///
/// This enum represents all possible errors that can occur during
/// invocation processing. Each variant includes relevant context
/// to help diagnose and resolve the issue. None of these errors is
/// fatal: the dispatcher returns them to the caller and keeps serving
/// future invocations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Wrong number of arguments for an operation
    ///
    /// Arity is checked before any store access, so a failed invocation
    /// leaves the ledger untouched.
    #[error("{operation} expects {expected} argument(s), got {actual}")]
    WrongArgumentCount {
        /// Operation name
        operation: String,
        /// Expected argument count
        expected: usize,
        /// Actual argument count
        actual: usize,
    },

    /// Amount argument is not valid integer text
    #[error("Invalid amount '{amount}' for {operation}: expected an integer")]
    InvalidAmount {
        /// Operation name
        operation: String,
        /// The offending amount text
        amount: String,
    },

    /// Negative amount where only a non-negative one is allowed
    ///
    /// Only `transfer` rejects negative amounts; `earn` accepts them as debits.
    #[error("Negative amount {amount} not allowed for {operation}")]
    NegativeAmount {
        /// Operation name
        operation: String,
        /// The rejected amount
        amount: i64,
    },

    /// Empty string supplied where an account name is required
    #[error("Empty account name for {operation}")]
    EmptyAccountName {
        /// Operation name
        operation: String,
    },

    /// Account has no stored balance but the operation requires one
    ///
    /// Absence is never silently treated as a zero balance.
    #[error("Account '{name}' not found")]
    AccountNotFound {
        /// Account name that was not found
        name: String,
    },

    /// Stored balance exists but is not valid integer text
    ///
    /// Balances are persisted as exact decimal text; anything else means
    /// the store was corrupted outside this engine.
    #[error("Corrupt balance for account '{name}': {raw:?} is not an integer")]
    StateCorruption {
        /// Account name with the corrupt value
        name: String,
        /// Lossy-decoded raw bytes, for diagnostics
        raw: String,
    },

    /// Insufficient funds for a transfer or debit
    ///
    /// The business rule is enforced at mutation time; the account state
    /// remains unchanged.
    #[error("Insufficient funds for account '{name}': balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account name
        name: String,
        /// Current balance
        balance: i64,
        /// Requested amount (transfer amount, or the signed earn adjustment)
        requested: i64,
    },

    /// Balance arithmetic would overflow an i64
    ///
    /// The operation is rejected to maintain ledger integrity.
    #[error("Arithmetic overflow in {operation} for account '{name}'")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account name
        name: String,
    },

    /// The underlying key-value store failed
    ///
    /// Store failures are surfaced verbatim and never retried.
    #[error("Store error: {message}")]
    StoreError {
        /// Description of the store failure
        message: String,
    },

    /// Unrecognized function name in an invocation or query
    #[error("Received unknown function '{function}'")]
    UnknownOperation {
        /// The unrecognized function name
        function: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::StoreError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError (CSV-backed store)
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        LedgerError::StoreError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a WrongArgumentCount error
    pub fn wrong_argument_count(operation: &str, expected: usize, actual: usize) -> Self {
        LedgerError::WrongArgumentCount {
            operation: operation.to_string(),
            expected,
            actual,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(operation: &str, amount: &str) -> Self {
        LedgerError::InvalidAmount {
            operation: operation.to_string(),
            amount: amount.to_string(),
        }
    }

    /// Create a NegativeAmount error
    pub fn negative_amount(operation: &str, amount: i64) -> Self {
        LedgerError::NegativeAmount {
            operation: operation.to_string(),
            amount,
        }
    }

    /// Create an EmptyAccountName error
    pub fn empty_account_name(operation: &str) -> Self {
        LedgerError::EmptyAccountName {
            operation: operation.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(name: &str) -> Self {
        LedgerError::AccountNotFound {
            name: name.to_string(),
        }
    }

    /// Create a StateCorruption error from the raw stored bytes
    pub fn state_corruption(name: &str, raw: &[u8]) -> Self {
        LedgerError::StateCorruption {
            name: name.to_string(),
            raw: String::from_utf8_lossy(raw).into_owned(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(name: &str, balance: i64, requested: i64) -> Self {
        LedgerError::InsufficientFunds {
            name: name.to_string(),
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, name: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            name: name.to_string(),
        }
    }

    /// Create a StoreError
    pub fn store_error(message: impl Into<String>) -> Self {
        LedgerError::StoreError {
            message: message.into(),
        }
    }

    /// Create an UnknownOperation error
    pub fn unknown_operation(function: &str) -> Self {
        LedgerError::UnknownOperation {
            function: function.to_string(),
        }
    }
}
