//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: account name, balance, and balance-lookup types
//! - `operation`: the operation enum for enum-keyed dispatch
//! - `error`: error types for the ledger engine

pub mod account;
pub mod error;
pub mod operation;

pub use account::{encode_balance, AccountName, Balance, BalanceLookup};
pub use error::LedgerError;
pub use operation::Operation;
