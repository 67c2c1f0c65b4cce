//! GPG cipher backend.
//!
//! Encrypts the store using GnuPG (GNU Privacy Guard).
//! Enable with `--features gpg`.
//!
//! ## Requirements
//!
//! - `gpg` CLI must be installed
//! - The public key file holds a GPG key fingerprint or email address
//! - Private key must be available in the keyring (or gpg-agent) for decryption
//!
//! Data is exchanged with gpg over pipes only; no plaintext file is created.
//!
//! gpg decrypts with whatever secret key in the keyring fits, so decryption
//! also reads gpg's status output and rejects ciphertext that was not
//! addressed to the configured recipient.
//!
//! ## Usage
//!
//! ```toml
//! # ~/.lockbox.toml
//! cipher = "gpg"
//! pubkey_path = "~/.lockbox.gpgid"
//! ```

use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::Cipher;
use crate::core::domain::RecipientKeyRef;
use crate::error::{CipherError, Result};

const STATUS_PREFIX: &str = "[GNUPG:] ";

/// GPG cipher backend using gpg CLI
#[derive(Debug, Clone, Default)]
pub struct Gpg {
    home: Option<PathBuf>,
}

impl Gpg {
    /// Use the default keyring (`GNUPGHOME` or `~/.gnupg`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the keyring in `home` (passed as `--homedir`).
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    /// Locate the gpg CLI
    fn check_gpg() -> Result<()> {
        which::which("gpg").map_err(|_| {
            CipherError::EncryptionFailed(
                "gpg CLI not found. Install GnuPG from https://gnupg.org/download/".to_string(),
            )
        })?;
        Ok(())
    }

    /// Run gpg with `args`, feeding `input` on stdin.
    fn run(&self, args: &[&str], input: &[u8]) -> std::io::Result<Output> {
        let mut cmd = Command::new("gpg");
        if let Some(home) = &self.home {
            cmd.arg("--homedir").arg(home);
        }
        let mut child = cmd
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // stdin is written from its own thread while stdout drains
        let stdin = child.stdin.take();
        std::thread::scope(|s| {
            let writer = s.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(input),
                None => Ok(()),
            });
            let output = child.wait_with_output()?;
            writer.join().map_err(|_| {
                std::io::Error::new(std::io::ErrorKind::Other, "gpg stdin writer panicked")
            })??;
            Ok(output)
        })
    }

    /// Key ids and fingerprints (primary and subkeys) the recipient names.
    fn recipient_key_ids(&self, recipient: &RecipientKeyRef) -> Result<HashSet<String>> {
        let output = self
            .run(
                &[
                    "--batch",
                    "--with-colons",
                    "--with-subkey-fingerprint",
                    "--list-keys",
                    recipient.as_str(),
                ],
                b"",
            )
            .map_err(|e| CipherError::DecryptionFailed(format!("gpg command failed: {}", e)))?;

        let ids = parse_key_ids(&String::from_utf8_lossy(&output.stdout));
        if !output.status.success() || ids.is_empty() {
            return Err(CipherError::DecryptionFailed(format!(
                "recipient {} is not in the gpg keyring",
                recipient
            ))
            .into());
        }

        debug!(recipient = %recipient, keys = ids.len(), "resolved gpg recipient");
        Ok(ids)
    }
}

/// Collect key ids (`pub`/`sub`) and fingerprints (`fpr`) from
/// `--with-colons` key listing output.
fn parse_key_ids(colons: &str) -> HashSet<String> {
    let mut ids = HashSet::new();
    for line in colons.lines() {
        let fields: Vec<&str> = line.split(':').collect();
        let id = match fields.first() {
            Some(&"pub") | Some(&"sub") => fields.get(4),
            Some(&"fpr") => fields.get(9),
            _ => None,
        };
        if let Some(id) = id.filter(|s| !s.is_empty()) {
            ids.insert(id.to_ascii_uppercase());
        }
    }
    ids
}

/// What gpg's status output says about a decryption.
#[derive(Debug, Default, PartialEq, Eq)]
struct DecryptStatus {
    /// `DECRYPTION_KEY`: the key actually used and its primary
    used: Vec<String>,
    /// `ENC_TO`: key ids the message was encrypted to
    addressed: Vec<String>,
}

impl DecryptStatus {
    fn parse(stderr: &str) -> Self {
        let mut status = Self::default();
        for line in stderr.lines() {
            let Some(rest) = line.strip_prefix(STATUS_PREFIX) else {
                continue;
            };
            let mut words = rest.split_whitespace();
            match words.next() {
                Some("DECRYPTION_KEY") => status
                    .used
                    .extend(words.take(2).map(str::to_ascii_uppercase)),
                Some("ENC_TO") => status
                    .addressed
                    .extend(words.next().map(str::to_ascii_uppercase)),
                _ => {}
            }
        }
        status
    }

    /// Whether the decryption belongs to one of `ids`.
    ///
    /// Older gpg releases omit `DECRYPTION_KEY`; `ENC_TO` is used then.
    fn belongs_to(&self, ids: &HashSet<String>) -> bool {
        let reported = if self.used.is_empty() {
            &self.addressed
        } else {
            &self.used
        };
        reported.iter().any(|k| ids.contains(k))
    }
}

/// gpg's stderr without the machine-readable status lines.
fn diagnostics(stderr: &str) -> String {
    stderr
        .lines()
        .filter(|l| !l.starts_with(STATUS_PREFIX))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Cipher for Gpg {
    fn name(&self) -> &'static str {
        "gpg"
    }

    fn encrypt(&self, plaintext: &[u8], recipient: &RecipientKeyRef) -> Result<Vec<u8>> {
        trace!(plaintext_len = plaintext.len(), "encrypting with GPG");

        Self::check_gpg()?;

        if recipient.as_str().is_empty() {
            return Err(CipherError::InvalidRecipient("empty gpg recipient".to_string()).into());
        }

        let output = self
            .run(
                &[
                    "--encrypt",
                    "--armor",
                    "--trust-model",
                    "always",  // Trust all keys without confirmation
                    "--batch", // Non-interactive mode
                    "--yes",   // Assume yes to all questions
                    "--recipient",
                    recipient.as_str(),
                ],
                plaintext,
            )
            .map_err(|e| CipherError::EncryptionFailed(format!("gpg command failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(
                CipherError::EncryptionFailed(format!("gpg encrypt failed: {}", stderr.trim()))
                    .into(),
            );
        }

        trace!(ciphertext_len = output.stdout.len(), "encrypted with GPG");
        Ok(output.stdout)
    }

    fn decrypt(
        &self,
        ciphertext: &[u8],
        recipient: &RecipientKeyRef,
    ) -> Result<Zeroizing<Vec<u8>>> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting with GPG");

        Self::check_gpg()?;

        if recipient.as_str().is_empty() {
            return Err(CipherError::InvalidRecipient("empty gpg recipient".to_string()).into());
        }
        let ids = self.recipient_key_ids(recipient)?;

        let output = self
            .run(
                &["--decrypt", "--batch", "--yes", "--quiet", "--status-fd", "2"],
                ciphertext,
            )
            .map_err(|e| CipherError::DecryptionFailed(format!("gpg command failed: {}", e)))?;
        let plaintext = Zeroizing::new(output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            return Err(CipherError::DecryptionFailed(format!(
                "gpg decrypt failed: {}. Ensure you have the private key in your keyring.",
                diagnostics(&stderr).trim()
            ))
            .into());
        }

        if !DecryptStatus::parse(&stderr).belongs_to(&ids) {
            return Err(CipherError::DecryptionFailed(format!(
                "ciphertext is not addressed to recipient {}",
                recipient
            ))
            .into());
        }

        trace!(plaintext_len = plaintext.len(), "decrypted with GPG");
        Ok(plaintext)
    }
}
