//! Record types.
//!
//! A `Record` is one key/value secret; a `RecordSet` is the decoded content
//! of the whole store.

use zeroize::Zeroizing;

use crate::core::validation::{validate_key, validate_value};
use crate::error::{RecordError, Result};

/// A single key/value secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Record {
    key: String,
    value: Zeroizing<String>,
}

impl Record {
    /// Create a record, validating both key and value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the key is empty or contains the delimiter
    /// or a line terminator, or if the value contains a line terminator.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let value = Zeroizing::new(value.into());
        validate_key(&key)?;
        validate_value(&key, &value)?;
        Ok(Self { key, value })
    }

    /// Record key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Plaintext value
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Record")
            .field("key", &self.key)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Ordered collection of records with unique keys.
///
/// Iteration follows insertion order. Lookups compare keys literally.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    /// Create an empty record set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by exact key.
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Append a record.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::DuplicateKey` if the key is already present.
    /// Existing records are never overwritten.
    pub fn insert(&mut self, record: Record) -> Result<()> {
        if self.contains(&record.key) {
            return Err(RecordError::DuplicateKey(record.key).into());
        }
        self.records.push(record);
        Ok(())
    }

    /// Remove the record with this key, returning it if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Record> {
        let index = self.records.iter().position(|r| r.key == key)?;
        Some(self.records.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Keys in store order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.key.as_str())
    }
}

impl std::fmt::Debug for RecordSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}
