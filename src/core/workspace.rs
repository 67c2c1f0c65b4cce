//! Ephemeral plaintext workspace.
//!
//! Decrypted store content only ever lives inside a [`Workspace`]. The
//! buffer is process memory owned by a single transaction; it is never
//! written to a file. Dropping the workspace zeroizes the bytes before the
//! allocation is freed, including when a transaction unwinds or returns
//! early with an error.

#[cfg(any(test, feature = "test-support"))]
use std::cell::Cell;

use tracing::trace;
use zeroize::{Zeroize, Zeroizing};

#[cfg(any(test, feature = "test-support"))]
thread_local! {
    static OUTSTANDING: Cell<usize> = const { Cell::new(0) };
}

/// Scoped holder for plaintext.
pub struct Workspace {
    buf: Zeroizing<Vec<u8>>,
}

impl Workspace {
    /// Acquire an empty workspace.
    pub fn acquire() -> Self {
        #[cfg(any(test, feature = "test-support"))]
        OUTSTANDING.with(|n| n.set(n.get() + 1));
        trace!("workspace acquired");
        Self {
            buf: Zeroizing::new(Vec::new()),
        }
    }

    /// Take ownership of plaintext, wiping whatever was held before.
    ///
    /// The heap allocation moves in without being copied.
    pub fn fill(&mut self, plaintext: Zeroizing<Vec<u8>>) {
        self.buf.zeroize();
        self.buf = plaintext;
        trace!(len = self.buf.len(), "workspace filled");
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Wipe and release now. Equivalent to dropping the workspace.
    pub fn release(self) {}

    /// Number of workspaces alive on the current thread.
    #[cfg(any(test, feature = "test-support"))]
    pub fn outstanding() -> usize {
        OUTSTANDING.with(Cell::get)
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        self.buf.zeroize();
        #[cfg(any(test, feature = "test-support"))]
        OUTSTANDING.with(|n| n.set(n.get().saturating_sub(1)));
        trace!("workspace released");
    }
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("len", &self.buf.len())
            .finish()
    }
}
