//! Input validation for lockbox operations.
//!
//! Validates record keys and values before they reach the store.

use crate::core::constants::DELIMITER;
use crate::error::{Result, ValidationError};

fn is_line_terminator(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Validate a record key.
///
/// Keys must be non-empty and cannot contain the `,` delimiter or a line
/// terminator. Any other character is allowed, including characters that
/// would be special in a search pattern.
///
/// # Errors
///
/// Returns `ValidationError` if the key is invalid.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey.into());
    }

    for (i, ch) in key.chars().enumerate() {
        let reason = if ch == DELIMITER {
            "contains the ',' delimiter"
        } else if is_line_terminator(ch) {
            "contains a line terminator"
        } else {
            continue;
        };
        return Err(ValidationError::InvalidKey {
            key: key.escape_debug().to_string(),
            reason: format!("{} at position {}", reason, i + 1),
        }
        .into());
    }

    Ok(())
}

/// Validate a record value.
///
/// Values may be empty and may contain commas, but not line terminators.
///
/// # Arguments
///
/// * `key` - The key name (for error messages)
/// * `value` - The value to validate
///
/// # Errors
///
/// Returns `ValidationError` if the value contains a line terminator.
pub fn validate_value(key: &str, value: &str) -> Result<()> {
    if value.chars().any(is_line_terminator) {
        return Err(ValidationError::InvalidValue {
            key: key.escape_debug().to_string(),
            reason: "contains a line terminator".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validate file permissions (Unix only).
///
/// Checks that a file has the expected permissions mode.
#[cfg(unix)]
pub fn validate_file_permissions(path: &std::path::Path, expected_mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path)?;
    let actual_mode = metadata.permissions().mode() & 0o777;

    if actual_mode != expected_mode {
        return Err(ValidationError::InvalidPermissions {
            path: path.display().to_string(),
            expected: format!("{:o}", expected_mode),
            actual: format!("{:o}", actual_mode),
        }
        .into());
    }

    Ok(())
}
