//! Recipient key reference.
//!
//! Identifies the public key secrets are encrypted to. The matching private
//! key lives outside lockbox (an identity file or a gpg agent).

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CipherError, Result};

/// Reference to the recipient public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientKeyRef {
    key: String,
    path: Option<PathBuf>,
}

impl RecipientKeyRef {
    /// Wrap a key string that is already in memory.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into().trim().to_string(),
            path: None,
        }
    }

    /// Load the recipient from a public key file.
    ///
    /// The first line that is neither blank nor a `#` comment is the key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::MissingRecipient` if the file does not exist and
    /// `CipherError::InvalidRecipient` if it holds no key.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading recipient key");

        if !path.exists() {
            return Err(CipherError::MissingRecipient(path.to_path_buf()).into());
        }
        let contents = std::fs::read_to_string(path)?;
        let key = contents
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty() && !l.starts_with('#'))
            .ok_or_else(|| {
                CipherError::InvalidRecipient(format!("{} holds no key", path.display()))
            })?;

        Ok(Self {
            key: key.to_string(),
            path: Some(path.to_path_buf()),
        })
    }

    /// The key text (age public key, gpg fingerprint or email)
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// File the key was read from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl std::fmt::Display for RecipientKeyRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}
