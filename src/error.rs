//! Error types.
//!
//! One enum per concern, wrapped by [`Error`]. Messages name keys and paths
//! but never secret values.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::constants::{EXIT_DUPLICATE_KEY, EXIT_FAILURE, EXIT_KEY_NOT_FOUND};

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Outcomes a caller is expected to branch on rather than treat as a crash.
    pub fn is_expected(&self) -> bool {
        matches!(self, Error::Record(_))
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Record(RecordError::DuplicateKey(_)) => EXIT_DUPLICATE_KEY,
            Error::Record(RecordError::KeyNotFound(_)) => EXIT_KEY_NOT_FOUND,
            _ => EXIT_FAILURE,
        }
    }
}

/// Encryption and decryption failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("invalid recipient key: {0}")]
    InvalidRecipient(String),

    #[error("recipient key file not found: {}", .0.display())]
    MissingRecipient(PathBuf),

    #[error("no private key available at {}", .0.display())]
    NoIdentity(PathBuf),

    #[error("invalid private key: {0}")]
    InvalidIdentity(String),

    #[error("key generation is not supported by the {0} backend")]
    KeyGenerationUnsupported(&'static str),
}

/// Malformed decrypted plaintext.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("store plaintext is not valid UTF-8")]
    NotUtf8,

    #[error("malformed record on line {line}: missing ',' delimiter")]
    MissingDelimiter { line: usize },

    #[error("malformed record on line {line}: empty key")]
    EmptyKey { line: usize },

    #[error("malformed record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("malformed store: key '{key}' repeated on line {line}")]
    DuplicateKey { line: usize, key: String },
}

/// Store file errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to replace {}: {source}", path.display())]
    Replace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Expected lookup outcomes.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("key not found: {0}")]
    KeyNotFound(String),

    #[error("key already exists: {0} (delete it first)")]
    DuplicateKey(String),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("failed to read config {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Input validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("key cannot be empty")]
    EmptyKey,

    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("insecure permissions on {path}: expected {expected}, found {actual}")]
    InvalidPermissions {
        path: String,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
