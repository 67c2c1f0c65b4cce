//! Command-line interface.

pub mod init;
pub mod output;
pub mod secrets;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::debug;

use crate::core::config::Config;
use crate::core::vault::Vault;
use crate::error::Result;

/// Lockbox - a single-file encrypted credential store.
#[derive(Parser, Debug)]
#[command(
    name = "lockbox",
    about = "A single-file encrypted credential store",
    version
)]
pub struct Cli {
    /// Record key
    #[arg(short = 'k', long)]
    pub key: Option<String>,

    /// Operation to perform
    #[arg(short = 'm', long, value_enum, default_value_t = Mode::New)]
    pub mode: Mode,

    /// Encrypted store file [default: ~/.lockbox]
    #[arg(short = 'p', long = "store", value_name = "STORE_PATH", env = "LOCKBOX_STORE")]
    pub store: Option<PathBuf>,

    /// Recipient public key file [default: ~/.lockbox.pub]
    #[arg(short = 'f', long = "pubkey", value_name = "PUBKEY_PATH", env = "LOCKBOX_PUBKEY")]
    pub pubkey: Option<PathBuf>,

    /// age private key file [default: ~/.lockbox.key]
    #[arg(short = 'i', long = "identity", value_name = "PATH", env = "LOCKBOX_IDENTITY")]
    pub identity: Option<PathBuf>,

    /// Length of generated values
    #[arg(short = 'l', long = "length", value_name = "GENERATED_LENGTH")]
    pub length: Option<usize>,

    /// Store this value instead of generating one (`-` reads a line from stdin)
    #[arg(long, value_name = "VALUE")]
    pub value: Option<String>,

    /// Create the key pair and an empty store if they are missing
    #[arg(long)]
    pub init: bool,

    /// Config file [default: ~/.lockbox.toml]
    #[arg(short = 'c', long = "config", value_name = "PATH", env = "LOCKBOX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Operations.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Add a new record (generated value unless --value is given)
    New,
    /// Print a record's value
    Get,
    /// Delete a record
    Del,
    /// List keys
    List,
}

impl Cli {
    /// Whether the invocation is missing its required `-k`.
    pub fn missing_key(&self) -> bool {
        self.key.is_none() && !self.init && self.mode != Mode::List
    }

    /// Resolve configuration: defaults, then config file, then flags.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(p) = &self.store {
            config.store_path = p.clone();
        }
        if let Some(p) = &self.pubkey {
            config.pubkey_path = p.clone();
        }
        if let Some(p) = &self.identity {
            config.identity_path = p.clone();
        }
        if let Some(n) = self.length {
            config.record_length = n;
        }

        config.validate()?;
        debug!(?config, "config resolved");
        Ok(config)
    }
}

/// Execute a parsed invocation.
pub fn execute(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;

    if cli.init {
        init::execute(&config)?;
    }

    let vault = Vault::open(config)?;
    match (cli.mode, cli.key.as_deref()) {
        (Mode::List, _) => secrets::list(&vault),
        (_, None) => Ok(()),
        (Mode::New, Some(key)) => secrets::new(&vault, key, cli.value.as_deref()),
        (Mode::Get, Some(key)) => secrets::get(&vault, key),
        (Mode::Del, Some(key)) => secrets::del(&vault, key),
    }
}
