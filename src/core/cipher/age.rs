//! Age encryption backend implementation.
//!
//! Provides encryption/decryption using the age format with x25519 keys
//! and ASCII armor encoding.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use ::age::x25519;
use tracing::{trace, warn};
use zeroize::Zeroizing;

use super::Cipher;
use crate::core::constants::PRIVATE_MODE;
use crate::core::domain::RecipientKeyRef;
use crate::error::{CipherError, Result};

/// Where the private key comes from.
enum IdentitySource {
    File(PathBuf),
    Inline(Box<x25519::Identity>),
}

/// Age-based cryptographic backend using x25519 keys
pub struct Age {
    identity: IdentitySource,
}

impl Age {
    /// Decrypt with the identity stored in `path`, read on each decryption.
    pub fn with_identity_file(path: impl Into<PathBuf>) -> Self {
        Self {
            identity: IdentitySource::File(path.into()),
        }
    }

    /// Decrypt with an identity already in memory.
    pub fn with_identity(identity: x25519::Identity) -> Self {
        Self {
            identity: IdentitySource::Inline(Box::new(identity)),
        }
    }

    fn with_loaded<T>(&self, f: impl FnOnce(&x25519::Identity) -> Result<T>) -> Result<T> {
        match &self.identity {
            IdentitySource::Inline(identity) => f(identity),
            IdentitySource::File(path) => f(&load_identity(path)?),
        }
    }
}

impl Cipher for Age {
    fn name(&self) -> &'static str {
        "age"
    }

    fn encrypt(&self, plaintext: &[u8], recipient: &RecipientKeyRef) -> Result<Vec<u8>> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let recipient = parse_recipient(recipient.as_str())?;
        let encryptor =
            age::Encryptor::with_recipients(std::iter::once(&recipient as &dyn age::Recipient))
                .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        let mut encrypted = Vec::new();
        let mut writer = encryptor
            .wrap_output(
                age::armor::ArmoredWriter::wrap_output(
                    &mut encrypted,
                    age::armor::Format::AsciiArmor,
                )
                .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?,
            )
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        writer
            .write_all(plaintext)
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;
        let armored = writer
            .finish()
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;
        armored
            .finish()
            .map_err(|e| CipherError::EncryptionFailed(format!("armor: {}", e)))?;

        trace!(ciphertext_len = encrypted.len(), "encrypted");
        Ok(encrypted)
    }

    fn decrypt(
        &self,
        ciphertext: &[u8],
        recipient: &RecipientKeyRef,
    ) -> Result<Zeroizing<Vec<u8>>> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        self.with_loaded(|identity| {
            if identity.to_public().to_string() != recipient.as_str() {
                return Err(CipherError::DecryptionFailed(format!(
                    "private key does not match recipient {}",
                    recipient
                ))
                .into());
            }

            let reader = age::armor::ArmoredReader::new(ciphertext);
            let decryptor = age::Decryptor::new(reader)
                .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

            let mut reader = decryptor
                .decrypt(std::iter::once(identity as &dyn age::Identity))
                .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

            let mut decrypted = Zeroizing::new(Vec::new());
            reader
                .read_to_end(&mut decrypted)
                .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

            trace!(plaintext_len = decrypted.len(), "decrypted");
            Ok(decrypted)
        })
    }
}

/// Parse a public key string into an age recipient
///
/// # Errors
///
/// Returns `CipherError::InvalidRecipient` if the key format is invalid.
pub fn parse_recipient(key: &str) -> Result<x25519::Recipient> {
    key.parse::<x25519::Recipient>()
        .map_err(|_| CipherError::InvalidRecipient(key.to_string()).into())
}

/// Load an age identity file.
///
/// Accepts the format written by `age-keygen`: `#` comment lines followed
/// by an `AGE-SECRET-KEY-` line.
///
/// # Errors
///
/// Returns `CipherError::NoIdentity` if the file is missing and
/// `CipherError::InvalidIdentity` if it holds no usable key.
pub fn load_identity(path: &Path) -> Result<x25519::Identity> {
    trace!(path = %path.display(), "loading identity");

    if !path.exists() {
        return Err(CipherError::NoIdentity(path.to_path_buf()).into());
    }

    #[cfg(unix)]
    {
        if crate::core::validation::validate_file_permissions(path, PRIVATE_MODE).is_err() {
            warn!(path = %path.display(), "insecure identity file permissions");
        }
    }

    let contents = Zeroizing::new(std::fs::read_to_string(path)?);
    let line = contents
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with('#'))
        .ok_or_else(|| CipherError::InvalidIdentity(format!("{} is empty", path.display())))?;

    line.parse::<x25519::Identity>()
        .map_err(|e: &str| CipherError::InvalidIdentity(e.to_string()).into())
}
