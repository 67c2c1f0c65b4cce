//! Cipher backend selection and dispatch.

use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use super::{Age, Cipher};
use crate::core::config::Config;
use crate::core::domain::RecipientKeyRef;
use crate::error::Result;
#[cfg(not(feature = "gpg"))]
use crate::error::CipherError;

/// Backend named in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    #[default]
    Age,
    Gpg,
}

impl CipherKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Gpg => "gpg",
        }
    }
}

/// Cipher backend for store operations.
///
/// - `Age`: age x25519 (default)
/// - `Gpg`: GPG encryption via gpg CLI
pub enum CipherBackend {
    /// Age encryption (default)
    Age(Age),

    /// GPG encryption
    #[cfg(feature = "gpg")]
    Gpg(super::gpg::Gpg),
}

impl CipherBackend {
    /// Create a cipher backend from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.cipher {
            CipherKind::Age => {
                debug!(identity = %config.identity_path.display(), "creating age cipher backend");
                Ok(Self::Age(Age::with_identity_file(&config.identity_path)))
            }
            CipherKind::Gpg => {
                #[cfg(feature = "gpg")]
                {
                    debug!("creating gpg cipher backend");
                    Ok(Self::Gpg(super::gpg::Gpg::new()))
                }
                #[cfg(not(feature = "gpg"))]
                {
                    Err(CipherError::EncryptionFailed(
                        "GPG support not compiled. Rebuild with: cargo install lockbox --features gpg"
                            .to_string(),
                    )
                    .into())
                }
            }
        }
    }
}

impl Cipher for CipherBackend {
    fn encrypt(&self, plaintext: &[u8], recipient: &RecipientKeyRef) -> Result<Vec<u8>> {
        match self {
            Self::Age(age) => age.encrypt(plaintext, recipient),
            #[cfg(feature = "gpg")]
            Self::Gpg(gpg) => gpg.encrypt(plaintext, recipient),
        }
    }

    fn decrypt(
        &self,
        ciphertext: &[u8],
        recipient: &RecipientKeyRef,
    ) -> Result<Zeroizing<Vec<u8>>> {
        match self {
            Self::Age(age) => age.decrypt(ciphertext, recipient),
            #[cfg(feature = "gpg")]
            Self::Gpg(gpg) => gpg.decrypt(ciphertext, recipient),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Age(age) => age.name(),
            #[cfg(feature = "gpg")]
            Self::Gpg(gpg) => gpg.name(),
        }
    }
}
