//! Store trait consumed by the ledger core
//!
//! The ledger does not own the persistence layer; it consumes this narrow
//! key-value contract. Implementations can be in-memory (tests, embedding)
//! or file-backed (the CLI).

use crate::types::LedgerError;

/// External key-value store contract
///
/// Absence is explicit: `get` returns `Ok(None)` for a missing key, never an
/// empty value the caller could misread as a balance. Store failures are
/// `Err(StoreError)`.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if absent
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Write `value` under `key`, overwriting any prior value
    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), LedgerError>;

    /// Write several entries atomically
    ///
    /// All-or-nothing: either every entry is applied or none is. Entries are
    /// applied in order, so a repeated key resolves to its last entry. This
    /// is the multi-key write `transfer` relies on to avoid a partial-failure
    /// window between the debit and the credit.
    fn put_many(&mut self, entries: &[(String, Vec<u8>)]) -> Result<(), LedgerError>;
}
