//! Ledger state machine
//!
//! This module provides the `LedgerStateMachine`, which owns the business
//! rules for account balances: seeding accounts, reading a balance, crediting
//! or debiting an account, overwriting a balance, and transferring between
//! two accounts. Every operation is a single-shot read-validate-write
//! transition against the external key-value store; there is no intermediate
//! state exposed to callers.
//!
//! The state machine enforces:
//! - Existing balances must parse as exact decimal integer text
//! - `earn` may not drive a balance below zero
//! - `transfer` may not move more than the source balance, and both new
//!   balances are persisted through one atomic multi-key write

use crate::store::KeyValueStore;
use crate::types::{encode_balance, Balance, BalanceLookup, LedgerError};

/// Balance every account is seeded with by `init`
pub const INITIAL_BALANCE: Balance = 1000;

/// The ledger business rules over an external key-value store
///
/// Generic over the store so the same rules run against the in-memory store
/// in tests and the CSV-backed store in the CLI.
pub struct LedgerStateMachine<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> LedgerStateMachine<S> {
    /// Create a state machine over the given store
    pub fn new(store: S) -> Self {
        LedgerStateMachine { store }
    }

    /// Consume the state machine, returning the store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Seed two accounts with the initial balance
    ///
    /// Unconditionally overwrites any prior value of either account. Both
    /// writes go through one atomic batch, so a store failure leaves neither
    /// account half-seeded.
    ///
    /// # Errors
    ///
    /// Returns an error if either name is empty or the store write fails.
    pub fn init(&mut self, account_a: &str, account_b: &str) -> Result<(), LedgerError> {
        require_name("init", account_a)?;
        require_name("init", account_b)?;

        self.store.put_many(&[
            (account_a.to_string(), encode_balance(INITIAL_BALANCE)),
            (account_b.to_string(), encode_balance(INITIAL_BALANCE)),
        ])
    }

    /// Read the raw stored balance bytes for an account
    ///
    /// Read-only. The bytes are passed through unchanged, without an
    /// integer-parse check. Absence is a distinct `AccountNotFound` error,
    /// never an empty value the caller could misread.
    pub fn get_balance(&self, name: &str) -> Result<Vec<u8>, LedgerError> {
        require_name("balance", name)?;

        self.store
            .get(name)?
            .ok_or_else(|| LedgerError::account_not_found(name))
    }

    /// Look up an account's balance as an explicit sum type
    ///
    /// Distinguishes Found, Absent and Corrupt without turning the latter
    /// two into errors; useful for callers that want to inspect state.
    pub fn lookup_balance(&self, name: &str) -> Result<BalanceLookup, LedgerError> {
        require_name("balance", name)?;

        let raw = self.store.get(name)?;
        Ok(BalanceLookup::from_raw(raw.as_deref()))
    }

    /// Adjust an account by a signed amount
    ///
    /// A negative amount is a debit. The account must already hold a valid
    /// balance; the adjusted balance may not go below zero.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty
    /// - The account is absent (`AccountNotFound`) or its stored value is
    ///   not integer text (`StateCorruption`)
    /// - `balance + amount` would be negative (`InsufficientFunds`)
    /// - The addition overflows (`ArithmeticOverflow`)
    /// - The store read or write fails
    pub fn earn(&mut self, to: &str, amount: Balance) -> Result<(), LedgerError> {
        require_name("earn", to)?;

        let balance = self.read_balance(to)?;

        let new_balance = balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("earn", to))?;

        if new_balance < 0 {
            return Err(LedgerError::insufficient_funds(to, balance, amount));
        }

        self.store.put(to, &encode_balance(new_balance))
    }

    /// Overwrite an account balance unconditionally
    ///
    /// No read of the prior value and no non-negativity check: `set` is the
    /// administrative escape hatch and accepts any integer, including
    /// negative ones.
    pub fn set(&mut self, to: &str, amount: Balance) -> Result<(), LedgerError> {
        require_name("set", to)?;

        self.store.put(to, &encode_balance(amount))
    }

    /// Move `amount` from one account to another
    ///
    /// Both accounts must hold valid balances. The amount must be
    /// non-negative and at most the source balance (transferring exactly the
    /// full balance is allowed). Both new balances are persisted through one
    /// atomic `put_many`, so the debit and credit land together or not at
    /// all. A self-transfer is permitted and leaves the balance unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either name is empty, or `amount` is negative
    /// - Either account is absent or corrupt
    /// - `amount > from_balance` (`InsufficientFunds`)
    /// - The credit overflows (`ArithmeticOverflow`)
    /// - The store read or write fails
    pub fn transfer(&mut self, from: &str, to: &str, amount: Balance) -> Result<(), LedgerError> {
        require_name("transfer", from)?;
        require_name("transfer", to)?;

        if amount < 0 {
            return Err(LedgerError::negative_amount("transfer", amount));
        }

        let from_balance = self.read_balance(from)?;
        if amount > from_balance {
            return Err(LedgerError::insufficient_funds(from, from_balance, amount));
        }

        // A self-transfer debits and credits the same account: the net
        // effect is no change, so once the funds check has passed there is
        // nothing to write
        if from == to {
            return Ok(());
        }

        let to_balance = self.read_balance(to)?;

        // amount is non-negative and at most from_balance, so the debit
        // cannot underflow
        let new_from = from_balance - amount;
        let new_to = to_balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("transfer", to))?;

        self.store.put_many(&[
            (from.to_string(), encode_balance(new_from)),
            (to.to_string(), encode_balance(new_to)),
        ])
    }

    /// Read and parse a required balance
    ///
    /// Absence and corruption surface as distinct errors.
    fn read_balance(&self, name: &str) -> Result<Balance, LedgerError> {
        let raw = self.store.get(name)?;
        BalanceLookup::from_raw(raw.as_deref()).require(name)
    }
}

/// Reject empty account names before touching the store
fn require_name(operation: &str, name: &str) -> Result<(), LedgerError> {
    if name.is_empty() {
        return Err(LedgerError::empty_account_name(operation));
    }
    Ok(())
}
