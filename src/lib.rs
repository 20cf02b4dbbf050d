//! Ledger Engine Library
//! # Overview
//!
//! This library provides a minimal ledger state machine: named signed-integer
//! balances kept in an external key-value store, with operations to
//! initialize, query, credit, overwrite, and atomically transfer between two
//! accounts.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Balance, BalanceLookup, Operation, LedgerError)
//! - [`cli`] - CLI argument parsing
//! - [`store`] - The key-value persistence boundary:
//!   - [`store::traits`] - the `KeyValueStore` contract the core consumes
//!   - [`store::memory`] - HashMap-backed store for tests and embedding
//!   - [`store::csv_file`] - CSV-file-backed persistent store for the CLI
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - the balance state machine (validation and transitions)
//!   - [`core::dispatcher`] - the function-name invocation surface
//!
//! # Operations
//!
//! The engine supports five operations:
//!
//! - **init**: seed two named accounts with balance 1000 each
//! - **transfer**: atomically move a non-negative amount between two accounts
//! - **earn**: adjust an account by a signed amount (negative = debit)
//! - **set**: overwrite an account balance unconditionally
//! - **balance**: read an account's raw stored balance (query)
//!
//! # Store Contract
//!
//! Balances are persisted as exact decimal text under the account name as
//! key. Absence is explicit (`Ok(None)`), never an empty value; `transfer`
//! persists both balances through one all-or-nothing multi-key write.

// Module declarations
pub mod cli;
pub mod core;
pub mod store;
pub mod types;

pub use crate::core::{Dispatcher, LedgerStateMachine, INITIAL_BALANCE};
pub use store::{CsvStore, KeyValueStore, MemoryStore};
pub use types::{AccountName, Balance, BalanceLookup, LedgerError, Operation};
