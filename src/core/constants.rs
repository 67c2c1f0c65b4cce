//! Constants used throughout lockbox.
//!
//! Centralizes file names, limits and exit codes.

/// Default store file name, relative to HOME (~/.lockbox).
pub const STORE_FILE: &str = ".lockbox";

/// Default public key file name, relative to HOME (~/.lockbox.pub).
pub const PUBKEY_FILE: &str = ".lockbox.pub";

/// Default age identity file name, relative to HOME (~/.lockbox.key).
pub const IDENTITY_FILE: &str = ".lockbox.key";

/// Default config file name, relative to HOME (~/.lockbox.toml).
pub const CONFIG_FILE: &str = ".lockbox.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "LOCKBOX_LOG";

/// Default length of generated secrets.
pub const DEFAULT_RECORD_LENGTH: usize = 20;

/// Upper bound for generated secrets.
pub const MAX_RECORD_LENGTH: usize = 1024;

/// Field delimiter in the decrypted record format.
pub const DELIMITER: char = ',';

/// Mode for the store file and the private key file.
pub const PRIVATE_MODE: u32 = 0o600;

/// Mode for the public key file.
pub const PUBLIC_MODE: u32 = 0o644;

pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_DUPLICATE_KEY: i32 = 3;
pub const EXIT_KEY_NOT_FOUND: i32 = 4;
