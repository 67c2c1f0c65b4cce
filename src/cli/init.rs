//! Init command - create key material and an empty store.

use tracing::info;

use crate::cli::output;
use crate::core::cipher::CipherBackend;
use crate::core::config::Config;
use crate::core::store;
use crate::error::Result;

/// Bootstrap the key pair and the store described by `config`.
///
/// Existing files are left untouched.
pub fn execute(config: &Config) -> Result<()> {
    let recipient = store::ensure_key_pair_exists(config)?;
    let cipher = CipherBackend::from_config(config)?;

    if store::ensure_store_exists(config, &cipher, &recipient)? {
        output::success(&format!(
            "initialized {}",
            config.store_path.display()
        ));
    } else {
        output::hint(&format!(
            "store already exists: {}",
            config.store_path.display()
        ));
    }

    info!(recipient = %recipient, cipher = config.cipher.name(), "initialized");
    Ok(())
}
