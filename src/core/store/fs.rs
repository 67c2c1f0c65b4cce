//! Filesystem access for the encrypted store.
//!
//! Only ciphertext and key files pass through here. Writes go to a temp
//! file in the target's directory which is then renamed over the target,
//! so the live file is either the old content or the new, never partial.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, trace};

use crate::error::{Result, StoreError};

/// Read the whole file at `path`.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if the file does not exist and
/// `StoreError::Read` for other failures.
pub fn read(path: &Path) -> Result<Vec<u8>> {
    trace!(path = %path.display(), "reading store");
    fs::read(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            StoreError::NotFound(path.to_path_buf()).into()
        } else {
            StoreError::Read {
                path: path.to_path_buf(),
                source,
            }
            .into()
        }
    })
}

/// Atomically replace `path` with `contents`.
///
/// The temp file is created beside the target so the final rename never
/// crosses filesystems. On any failure the temp file is removed when it
/// drops and the target is left untouched.
///
/// # Errors
///
/// Returns `StoreError::Replace` if any step fails.
pub fn replace(path: &Path, contents: &[u8], mode: u32) -> Result<()> {
    debug!(path = %path.display(), len = contents.len(), "replacing file");

    let fail = |source: std::io::Error| StoreError::Replace {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent).map_err(fail)?;
    tmp.write_all(contents).map_err(fail)?;
    tmp.flush().map_err(fail)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(mode))
            .map_err(fail)?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    tmp.as_file().sync_all().map_err(fail)?;
    tmp.persist(path).map_err(|e| fail(e.error))?;

    trace!(path = %path.display(), "replaced");
    Ok(())
}
