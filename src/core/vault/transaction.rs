//! One decrypt → apply → encrypt cycle.
//!
//! A `Transaction` owns the plaintext workspace for its whole lifetime.
//! Whatever path ends it, the workspace drops with it, and a transaction
//! that never reached a terminal phase is logged as aborted.
//!
//! The recipient is resolved after the store read, so a missing store
//! reports as such even when the public key file is also gone.

use tracing::debug;

use super::Vault;
use crate::core::cipher::Cipher;
use crate::core::codec;
use crate::core::constants::PRIVATE_MODE;
use crate::core::domain::{RecipientKeyRef, RecordSet};
use crate::core::store::fs;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Transaction progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Begin,
    Load,
    Decode,
    Apply,
    Commit,
    /// Read-only success; nothing was written.
    Completed,
    Committed,
    Aborted,
}

pub(super) struct Transaction<'v, C: Cipher> {
    vault: &'v Vault<C>,
    op: &'static str,
    recipient: Option<RecipientKeyRef>,
    workspace: Workspace,
    phase: Phase,
}

impl<'v, C: Cipher> Transaction<'v, C> {
    /// Acquire a workspace.
    pub(super) fn begin(vault: &'v Vault<C>, op: &'static str) -> Self {
        debug!(op, store = %vault.config.store_path.display(), "transaction begin");

        Self {
            vault,
            op,
            recipient: None,
            workspace: Workspace::acquire(),
            phase: Phase::Begin,
        }
    }

    fn resolve_recipient(&self) -> Result<RecipientKeyRef> {
        RecipientKeyRef::load(&self.vault.config.pubkey_path)
    }

    /// Decrypt the store into the workspace and decode it.
    pub(super) fn load(&mut self) -> Result<RecordSet> {
        self.phase = Phase::Load;
        let ciphertext = fs::read(&self.vault.config.store_path)?;
        let recipient = self.resolve_recipient()?;
        let plaintext = self.vault.cipher.decrypt(&ciphertext, &recipient)?;
        self.recipient = Some(recipient);
        self.workspace.fill(plaintext);

        self.phase = Phase::Decode;
        let set = codec::parse(self.workspace.as_bytes())?;
        debug!(op = self.op, records = set.len(), "store loaded");

        self.phase = Phase::Apply;
        Ok(set)
    }

    /// Encode, encrypt and atomically replace the store.
    pub(super) fn commit(mut self, set: &RecordSet) -> Result<()> {
        self.phase = Phase::Commit;
        let recipient = match self.recipient.take() {
            Some(recipient) => recipient,
            None => self.resolve_recipient()?,
        };
        self.workspace.fill(codec::serialize(set));
        let ciphertext = self
            .vault
            .cipher
            .encrypt(self.workspace.as_bytes(), &recipient)?;
        fs::replace(&self.vault.config.store_path, &ciphertext, PRIVATE_MODE)?;

        self.phase = Phase::Committed;
        Ok(())
    }

    /// End a read-only transaction.
    pub(super) fn complete(mut self) {
        self.phase = Phase::Completed;
    }
}

impl<C: Cipher> Drop for Transaction<'_, C> {
    fn drop(&mut self) {
        match self.phase {
            Phase::Committed | Phase::Completed => {
                debug!(op = self.op, phase = ?self.phase, "transaction end");
            }
            at => {
                debug!(op = self.op, ?at, phase = ?Phase::Aborted, "transaction aborted");
            }
        }
    }
}
