//! Lockbox - a single-file encrypted credential store.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lockbox::cli::output;
use lockbox::cli::{execute, Cli};
use lockbox::core::constants::LOG_ENV;
use lockbox::error::{CipherError, Error, StoreError};

fn main() {
    let cli = Cli::parse();

    if cli.missing_key() {
        Cli::command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "the following required arguments were not provided:\n  --key <KEY>",
            )
            .exit();
    }

    // Logs share stderr with notices; stdout is reserved for values
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("lockbox=debug")
        } else {
            EnvFilter::new("lockbox=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let error_msg = e.to_string();
        let suggestion = match &e {
            Error::Store(StoreError::NotFound(_)) => Some("run with --init to create it"),
            Error::Cipher(CipherError::MissingRecipient(_)) => {
                Some("run with --init to generate a key pair")
            }
            Error::Cipher(CipherError::NoIdentity(_)) => {
                Some("pass the private key with --identity, or run with --init")
            }
            _ => None,
        };

        if e.is_expected() {
            output::warn(&error_msg);
        } else {
            output::error(&error_msg);
        }
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(e.exit_code());
    }
}
