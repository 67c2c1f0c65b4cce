//! The primary interface for lockbox operations.
//!
//! A `Vault` owns the resolved configuration and a cipher backend. Every
//! operation runs as one transaction over the whole store: decrypt, decode,
//! apply, and for mutations re-encrypt and atomically replace the file.
//!
//! Transactions in different processes are not coordinated. Two writers
//! that overlap both read the same starting state and the later commit
//! wins; the store is never corrupted, but the earlier change is lost.

mod secrets;
mod transaction;

pub use transaction::Phase;

use crate::core::cipher::{Cipher, CipherBackend};
use crate::core::config::Config;
use crate::error::Result;

/// Transactional access to the encrypted store.
pub struct Vault<C: Cipher = CipherBackend> {
    config: Config,
    cipher: C,
}

impl<C: Cipher> std::fmt::Debug for Vault<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vault")
            .field("config", &self.config)
            .field("cipher", &self.cipher.name())
            .finish()
    }
}

impl Vault<CipherBackend> {
    /// Open the store described by `config` with the configured backend.
    ///
    /// Nothing is read until the first operation; a missing store surfaces
    /// then as `StoreError::NotFound`.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the backend is not
    /// available in this build.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        let cipher = CipherBackend::from_config(&config)?;
        Ok(Self { config, cipher })
    }
}

impl<C: Cipher> Vault<C> {
    /// Use an explicit cipher backend.
    pub fn with_cipher(config: Config, cipher: C) -> Self {
        Self { config, cipher }
    }

    /// Get config reference.
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cipher(&self) -> &C {
        &self.cipher
    }
}
