//! CSV-file-backed key-value store
//!
//! Persistent store used by the CLI: one CSV row per key, columns
//! `key,value`. The whole file is loaded at open and kept in memory; every
//! write rewrites the file to a temporary sibling and renames it over the
//! original, so a failed write leaves the previous file intact. That rename
//! is what makes `put_many` all-or-nothing at file granularity.
//!
//! Values must be valid UTF-8 (balances always are, being decimal text);
//! writing a non-UTF-8 value is a `StoreError`.

use crate::store::traits::KeyValueStore;
use crate::types::LedgerError;
use csv::{Reader, Writer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One persisted key-value row
#[derive(Debug, Serialize, Deserialize)]
struct KeyValueRecord {
    key: String,
    value: String,
}

/// Persistent key-value store backed by a CSV file
#[derive(Debug)]
pub struct CsvStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl CsvStore {
    /// Open a store at `path`, loading existing rows if the file exists
    ///
    /// A missing file is an empty store; the file is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let path = path.into();

        let entries = if path.exists() {
            let mut reader = Reader::from_path(&path)?;
            let mut entries = HashMap::new();
            for result in reader.deserialize() {
                let record: KeyValueRecord = result?;
                entries.insert(record.key, record.value);
            }
            entries
        } else {
            HashMap::new()
        };

        tracing::info!(path = %path.display(), keys = entries.len(), "opened CSV store");

        Ok(CsvStore { path, entries })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `entries` to a temporary sibling file, then rename over the
    /// backing file. On any failure the previous file is untouched.
    fn write_file(path: &Path, entries: &HashMap<String, String>) -> Result<(), LedgerError> {
        let tmp_path = path.with_extension("csv.tmp");

        {
            let mut writer = Writer::from_path(&tmp_path)?;

            // Sorted rows keep the file diff-friendly and deterministic
            let mut rows: Vec<(&String, &String)> = entries.iter().collect();
            rows.sort_by(|(a, _), (b, _)| a.cmp(b));

            for (key, value) in rows {
                writer.serialize(KeyValueRecord {
                    key: key.clone(),
                    value: value.clone(),
                })?;
            }
            writer.flush().map_err(LedgerError::from)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    /// Decode a value argument, rejecting non-UTF-8 bytes
    fn decode_value(key: &str, value: &[u8]) -> Result<String, LedgerError> {
        std::str::from_utf8(value)
            .map(str::to_string)
            .map_err(|_| {
                LedgerError::store_error(format!("non-UTF-8 value for key '{}'", key))
            })
    }
}

impl KeyValueStore for CsvStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.entries.get(key).map(|value| value.clone().into_bytes()))
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        self.put_many(&[(key.to_string(), value.to_vec())])
    }

    fn put_many(&mut self, entries: &[(String, Vec<u8>)]) -> Result<(), LedgerError> {
        // Stage on a copy; commit to memory only after the file write succeeds
        let mut staged = self.entries.clone();
        for (key, value) in entries {
            staged.insert(key.clone(), Self::decode_value(key, value)?);
        }

        Self::write_file(&self.path, &staged)?;
        self.entries = staged;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_path(dir: &TempDir) -> PathBuf {
        dir.path().join("ledger.csv")
    }

    #[test]
    fn test_open_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::open(store_path(&dir)).unwrap();
        assert_eq!(store.get("alice").unwrap(), None);
    }

    #[test]
    fn test_put_then_get() {
        let dir = TempDir::new().unwrap();
        let mut store = CsvStore::open(store_path(&dir)).unwrap();

        store.put("alice", b"1000").unwrap();

        assert_eq!(store.get("alice").unwrap(), Some(b"1000".to_vec()));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);

        {
            let mut store = CsvStore::open(&path).unwrap();
            store.put("alice", b"700").unwrap();
            store.put("bob", b"1300").unwrap();
        }

        let store = CsvStore::open(&path).unwrap();
        assert_eq!(store.get("alice").unwrap(), Some(b"700".to_vec()));
        assert_eq!(store.get("bob").unwrap(), Some(b"1300".to_vec()));
    }

    #[test]
    fn test_put_overwrites_prior_value_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);

        {
            let mut store = CsvStore::open(&path).unwrap();
            store.put("alice", b"1000").unwrap();
            store.put("alice", b"250").unwrap();
        }

        let store = CsvStore::open(&path).unwrap();
        assert_eq!(store.get("alice").unwrap(), Some(b"250".to_vec()));
    }

    #[test]
    fn test_put_many_applies_all_entries() {
        let dir = TempDir::new().unwrap();
        let mut store = CsvStore::open(store_path(&dir)).unwrap();

        store
            .put_many(&[
                ("alice".to_string(), b"700".to_vec()),
                ("bob".to_string(), b"1300".to_vec()),
            ])
            .unwrap();

        assert_eq!(store.get("alice").unwrap(), Some(b"700".to_vec()));
        assert_eq!(store.get("bob").unwrap(), Some(b"1300".to_vec()));
    }

    #[test]
    fn test_non_utf8_value_is_store_error_and_leaves_state_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut store = CsvStore::open(store_path(&dir)).unwrap();
        store.put("alice", b"1000").unwrap();

        let result = store.put_many(&[
            ("alice".to_string(), b"999".to_vec()),
            ("bob".to_string(), vec![0xff, 0xfe]),
        ]);

        assert!(matches!(result, Err(LedgerError::StoreError { .. })));
        // Neither entry of the failed batch is visible
        assert_eq!(store.get("alice").unwrap(), Some(b"1000".to_vec()));
        assert_eq!(store.get("bob").unwrap(), None);
    }

    #[test]
    fn test_failed_write_leaves_backing_file_intact() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        {
            let mut store = CsvStore::open(&path).unwrap();
            store.put("alice", b"1000").unwrap();
            let _ = store.put("bob", &[0xff]);
        }

        let store = CsvStore::open(&path).unwrap();
        assert_eq!(store.get("alice").unwrap(), Some(b"1000".to_vec()));
        assert_eq!(store.get("bob").unwrap(), None);
    }
}
