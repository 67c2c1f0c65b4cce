//! Durable storage.
//!
//! `fs` reads and atomically replaces the encrypted store and key files;
//! `bootstrap` creates them on first run.

pub mod bootstrap;
pub mod fs;

pub use bootstrap::{ensure_key_pair_exists, ensure_store_exists};
