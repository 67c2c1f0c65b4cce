//! Lockbox - a single-file encrypted credential store.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Flags and dispatch
//! │   ├── secrets       # new / get / del / list
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── cipher/       # Encryption backends
//!     │   ├── mod       # Cipher trait
//!     │   ├── age       # age encryption implementation
//!     │   └── gpg       # gpg CLI implementation (feature `gpg`)
//!     ├── codec         # key,value plaintext format
//!     ├── config        # Path and backend resolution
//!     ├── domain/       # Record, RecordSet, RecipientKeyRef
//!     ├── store/        # Atomic file replace and first-run bootstrap
//!     ├── vault/        # Transactional get/put/delete
//!     └── workspace     # Scoped, zeroized plaintext buffer
//! ```
//!
//! # Example
//!
//! ```no_run
//! use lockbox::core::config::Config;
//! use lockbox::core::vault::Vault;
//!
//! # fn main() -> lockbox::error::Result<()> {
//! let vault = Vault::open(Config::load(None)?)?;
//! vault.put("db-prod", "s3cr3t!")?;
//! assert_eq!(vault.get("db-prod")?.as_str(), "s3cr3t!");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
