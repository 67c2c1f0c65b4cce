//! Cryptographic operations.
//!
//! Provides the encryption/decryption abstraction the store is built on.
//! Lockbox never implements primitives itself; it delegates to a backend:
//!
//! - **age**: Default, always available. Uses x25519 public-key encryption.
//! - **GPG**: Feature-gated (`gpg`). Uses GnuPG via the gpg CLI.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Feature-gate if appropriate
//! 4. Add a variant to `CipherBackend`

use zeroize::Zeroizing;

use crate::core::domain::RecipientKeyRef;
use crate::error::Result;

mod age;
mod backend;

#[cfg(feature = "gpg")]
pub mod gpg;

pub use self::age::{load_identity, parse_recipient, Age};
pub use backend::{CipherBackend, CipherKind};

/// Cryptographic backend trait.
///
/// Backends transform bytes only. They never write to durable storage;
/// callers own file placement.
pub trait Cipher {
    /// Encrypt plaintext for the recipient.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if the recipient is missing or unusable, or if
    /// encryption fails.
    fn encrypt(&self, plaintext: &[u8], recipient: &RecipientKeyRef) -> Result<Vec<u8>>;

    /// Decrypt ciphertext addressed to the recipient.
    ///
    /// The plaintext is returned in a buffer that is wiped on drop.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if no matching private key is available, the
    /// ciphertext is malformed, or it was not encrypted for this recipient.
    fn decrypt(&self, ciphertext: &[u8], recipient: &RecipientKeyRef)
        -> Result<Zeroizing<Vec<u8>>>;

    /// Backend name for display/config.
    fn name(&self) -> &'static str;
}
