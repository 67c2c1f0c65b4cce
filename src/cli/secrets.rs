//! Record commands (new, get, del, list).

use std::io::BufRead;

use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::cipher::Cipher;
use crate::core::generate::generate;
use crate::core::vault::Vault;
use crate::error::Result;

/// Add a record under `key` and print its value.
///
/// Without `value` a secret is generated. `-` reads the value from the
/// first line of stdin.
pub fn new<C: Cipher>(vault: &Vault<C>, key: &str, value: Option<&str>) -> Result<()> {
    let value = match value {
        Some("-") => read_stdin_line()?,
        Some(value) => Zeroizing::new(value.to_string()),
        None => generate(vault.config().record_length),
    };

    vault.put(key, &value)?;
    output::data(&value);
    output::success(&format!("stored {}", key));
    Ok(())
}

/// Print the value stored under `key`.
pub fn get<C: Cipher>(vault: &Vault<C>, key: &str) -> Result<()> {
    let value = vault.get(key)?;
    output::data(&value);
    Ok(())
}

/// Delete the record under `key`, if any.
pub fn del<C: Cipher>(vault: &Vault<C>, key: &str) -> Result<()> {
    if vault.delete(key)? {
        output::success(&format!("removed {}", key));
    } else {
        output::hint(&format!("no record for {}, nothing removed", key));
    }
    Ok(())
}

/// Print every key, one per line, in store order.
pub fn list<C: Cipher>(vault: &Vault<C>) -> Result<()> {
    for key in vault.keys()? {
        output::data(&key);
    }
    Ok(())
}

fn read_stdin_line() -> Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    std::io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}
