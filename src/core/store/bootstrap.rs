//! First-run creation of key material and the store.
//!
//! The vault never calls into this module; the CLI does, and only when the
//! user asks for initialization.

use age::x25519;
use tracing::{debug, info};

use super::fs;
use crate::core::cipher::{load_identity, Cipher, CipherKind};
use crate::core::codec;
use crate::core::config::Config;
use crate::core::constants::{PRIVATE_MODE, PUBLIC_MODE};
use crate::core::domain::{RecipientKeyRef, RecordSet};
use crate::error::{CipherError, Result};

/// Make sure a recipient public key exists, generating one if needed.
///
/// For age, an existing identity file is reused; otherwise a new identity
/// is generated and written with mode 0600 before the public key is
/// derived from it. Other backends must be set up outside lockbox.
///
/// # Errors
///
/// Returns `CipherError::KeyGenerationUnsupported` when the public key is
/// missing and the backend cannot generate one, or a `StoreError` if
/// writing a key file fails.
pub fn ensure_key_pair_exists(config: &Config) -> Result<RecipientKeyRef> {
    if config.pubkey_path.exists() {
        debug!(path = %config.pubkey_path.display(), "public key present");
        return RecipientKeyRef::load(&config.pubkey_path);
    }

    if config.cipher != CipherKind::Age {
        return Err(CipherError::KeyGenerationUnsupported(config.cipher.name()).into());
    }

    let public = if config.identity_path.exists() {
        debug!(path = %config.identity_path.display(), "deriving public key from identity");
        load_identity(&config.identity_path)?.to_public()
    } else {
        info!(path = %config.identity_path.display(), "generating identity");
        write_identity(config)?
    };

    let public = public.to_string();
    fs::replace(
        &config.pubkey_path,
        format!("{}\n", public).as_bytes(),
        PUBLIC_MODE,
    )?;

    RecipientKeyRef::load(&config.pubkey_path)
}

fn write_identity(config: &Config) -> Result<x25519::Recipient> {
    use age::secrecy::ExposeSecret;
    use zeroize::Zeroizing;

    let identity = x25519::Identity::generate();
    let public = identity.to_public();

    let contents = Zeroizing::new(format!(
        "# public key: {}\n{}\n",
        public,
        identity.to_string().expose_secret()
    ));
    fs::replace(&config.identity_path, contents.as_bytes(), PRIVATE_MODE)?;

    Ok(public)
}

/// Make sure the store exists, creating it empty if needed.
///
/// Returns `true` if the store was created.
///
/// # Errors
///
/// Returns an error if encryption or the write fails.
pub fn ensure_store_exists<C: Cipher>(
    config: &Config,
    cipher: &C,
    recipient: &RecipientKeyRef,
) -> Result<bool> {
    if config.store_path.exists() {
        debug!(path = %config.store_path.display(), "store present");
        return Ok(false);
    }

    info!(path = %config.store_path.display(), "creating empty store");
    let plaintext = codec::serialize(&RecordSet::new());
    let ciphertext = cipher.encrypt(&plaintext, recipient)?;
    fs::replace(&config.store_path, &ciphertext, PRIVATE_MODE)?;

    Ok(true)
}
