//! Record operations.
//!
//! get/put/delete over the encrypted store.

use zeroize::Zeroizing;

use super::transaction::Transaction;
use super::Vault;
use crate::core::cipher::Cipher;
use crate::core::domain::Record;
use crate::error::{RecordError, Result};

impl<C: Cipher> Vault<C> {
    /// Get a decrypted value by exact key.
    ///
    /// Read-only: the store file is never written.
    ///
    /// # Returns
    ///
    /// The plaintext value wrapped in `Zeroizing` for secure memory cleanup.
    /// An empty string is a valid, found value.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::KeyNotFound` if the key is absent, or a fatal
    /// error if the store cannot be loaded.
    pub fn get(&self, key: &str) -> Result<Zeroizing<String>> {
        let mut tx = Transaction::begin(self, "get");
        let set = tx.load()?;

        let value = set
            .get(key)
            .map(|r| Zeroizing::new(r.value().to_string()))
            .ok_or_else(|| RecordError::KeyNotFound(key.to_string()))?;

        tx.complete();
        Ok(value)
    }

    /// Add a new record.
    ///
    /// There is no overwrite: an existing key must be deleted first.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if key or value is invalid,
    /// `RecordError::DuplicateKey` if the key exists (the store is left
    /// unchanged), or a fatal error if load or commit fails.
    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        let record = Record::new(key, value)?;

        let mut tx = Transaction::begin(self, "put");
        let mut set = tx.load()?;
        set.insert(record)?;
        tx.commit(&set)
    }

    /// Remove a record.
    ///
    /// Removing an absent key is a successful no-op that leaves the store
    /// file untouched.
    ///
    /// # Returns
    ///
    /// `true` if a record was removed.
    ///
    /// # Errors
    ///
    /// Returns a fatal error if load or commit fails.
    pub fn delete(&self, key: &str) -> Result<bool> {
        let mut tx = Transaction::begin(self, "delete");
        let mut set = tx.load()?;

        if set.remove(key).is_none() {
            tx.complete();
            return Ok(false);
        }

        tx.commit(&set)?;
        Ok(true)
    }

    /// List keys in store order.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut tx = Transaction::begin(self, "keys");
        let set = tx.load()?;
        let keys = set.keys().map(str::to_string).collect();
        tx.complete();
        Ok(keys)
    }
}
