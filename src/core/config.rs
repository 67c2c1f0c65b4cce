//! Configuration.
//!
//! Resolves the store, public key and identity locations once at startup.
//! Defaults live in the home directory; an optional `~/.lockbox.toml` (or
//! an explicit file) overrides them, and the CLI overrides the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::cipher::CipherKind;
use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Resolved configuration passed into the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Encrypted store file
    pub store_path: PathBuf,
    /// Recipient public key file
    pub pubkey_path: PathBuf,
    /// age private key file (unused by the gpg backend)
    pub identity_path: PathBuf,
    /// Length of generated secrets
    pub record_length: usize,
    /// Cipher backend
    pub cipher: CipherKind,
}

/// On-disk overrides; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    store_path: Option<String>,
    pubkey_path: Option<String>,
    identity_path: Option<String>,
    record_length: Option<usize>,
    cipher: Option<CipherKind>,
}

impl Config {
    /// Configuration with every file placed directly under `root`.
    pub fn rooted(root: &Path) -> Self {
        Self {
            store_path: root.join(constants::STORE_FILE),
            pubkey_path: root.join(constants::PUBKEY_FILE),
            identity_path: root.join(constants::IDENTITY_FILE),
            record_length: constants::DEFAULT_RECORD_LENGTH,
            cipher: CipherKind::default(),
        }
    }

    /// Default configuration rooted at the home directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if HOME cannot be determined.
    pub fn defaults() -> Result<Self> {
        Ok(Self::rooted(&home_dir()?))
    }

    /// Default config file location (`~/.lockbox.toml`).
    pub fn default_file() -> Result<PathBuf> {
        Ok(home_dir()?.join(constants::CONFIG_FILE))
    }

    /// Resolve configuration.
    ///
    /// An explicit `file` must exist. Without one, `~/.lockbox.toml` is read
    /// if present and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, fails to parse, or
    /// holds invalid values.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let defaults = Self::defaults()?;

        let path = match file {
            Some(p) => p.to_path_buf(),
            None => {
                let p = Self::default_file()?;
                if !p.exists() {
                    debug!("no config file, using defaults");
                    return Ok(defaults);
                }
                p
            }
        };

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let config = defaults.merge_toml(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply TOML overrides on top of `self`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed or names an
    /// unknown field.
    pub fn merge_toml(mut self, contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents).map_err(ConfigError::Parse)?;

        if let Some(p) = file.store_path {
            self.store_path = expand_home(&p)?;
        }
        if let Some(p) = file.pubkey_path {
            self.pubkey_path = expand_home(&p)?;
        }
        if let Some(p) = file.identity_path {
            self.identity_path = expand_home(&p)?;
        }
        if let Some(n) = file.record_length {
            self.record_length = n;
        }
        if let Some(c) = file.cipher {
            self.cipher = c;
        }

        Ok(self)
    }

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `record_length` is out of range
    /// or two roles share one path.
    pub fn validate(&self) -> Result<()> {
        if self.record_length == 0 || self.record_length > constants::MAX_RECORD_LENGTH {
            return Err(ConfigError::InvalidValue {
                field: "record_length",
                reason: format!(
                    "must be between 1 and {}, got {}",
                    constants::MAX_RECORD_LENGTH,
                    self.record_length
                ),
            }
            .into());
        }

        if self.store_path == self.pubkey_path || self.store_path == self.identity_path {
            return Err(ConfigError::InvalidValue {
                field: "store_path",
                reason: "must differ from the key file paths".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| ConfigError::NoHomeDir.into())
}

/// Expand a leading `~/` to the home directory.
fn expand_home(raw: &str) -> Result<PathBuf> {
    match raw.strip_prefix("~/") {
        Some(rest) => Ok(home_dir()?.join(rest)),
        None if raw == "~" => home_dir(),
        None => Ok(PathBuf::from(raw)),
    }
}
