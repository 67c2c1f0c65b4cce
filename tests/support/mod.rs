//! Test support utilities for lockbox integration tests.
//!
//! Provides an isolated home directory and helper commands.

#![allow(dead_code)]

pub mod commands;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated home directory.
///
/// The default store, key and config paths all resolve under `home`, so
/// tests can run in parallel without touching the real home.
pub struct Test {
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        Self { home }
    }

    /// Create a test environment with key pair and empty store.
    pub fn init() -> Self {
        let t = Self::new();
        let output = t.init_cmd();
        assert!(
            output.status.success(),
            "Failed to initialize store: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create an initialized environment with records added.
    pub fn with_records(records: &[(&str, &str)]) -> Self {
        let t = Self::init();
        for (k, v) in records {
            let output = t.put(k, v);
            assert!(
                output.status.success(),
                "Failed to add record {}: {}",
                k,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Default store path.
    pub fn store_path(&self) -> PathBuf {
        self.home.path().join(".lockbox")
    }

    /// Default public key path.
    pub fn pubkey_path(&self) -> PathBuf {
        self.home.path().join(".lockbox.pub")
    }

    /// Default identity path.
    pub fn identity_path(&self) -> PathBuf {
        self.home.path().join(".lockbox.key")
    }

    /// Current store bytes.
    pub fn store_bytes(&self) -> Vec<u8> {
        std::fs::read(self.store_path()).expect("failed to read store")
    }
}
