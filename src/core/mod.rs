//! Core business logic module
//!
//! This module contains the ledger's decision logic:
//! - `ledger` - the balance state machine (validation and transition rules)
//! - `dispatcher` - the invocation surface routing function names to it

pub mod dispatcher;
pub mod ledger;

pub use dispatcher::Dispatcher;
pub use ledger::{LedgerStateMachine, INITIAL_BALANCE};
