//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Environment variables that would leak the caller's setup into tests.
const SCRUBBED_ENV: &[&str] = &[
    "LOCKBOX_STORE",
    "LOCKBOX_PUBKEY",
    "LOCKBOX_IDENTITY",
    "LOCKBOX_CONFIG",
    "LOCKBOX_LOG",
];

impl Test {
    /// Create a lockbox command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the temporary home directory
    /// - Colors disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("lockbox").expect("failed to find lockbox binary");
        for var in SCRUBBED_ENV {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.home.path());
        cmd
    }

    /// Shortcut for `lockbox --init`.
    pub fn init_cmd(&self) -> Output {
        self.cmd()
            .arg("--init")
            .output()
            .expect("failed to run lockbox --init")
    }

    /// Shortcut for `lockbox -k KEY` (generated value).
    pub fn new_key(&self, key: &str) -> Output {
        self.cmd()
            .args(["-k", key])
            .output()
            .expect("failed to run lockbox -m new")
    }

    /// Shortcut for `lockbox -k KEY --value VALUE`.
    pub fn put(&self, key: &str, value: &str) -> Output {
        self.cmd()
            .args(["-k", key, "--value", value])
            .output()
            .expect("failed to run lockbox -m new --value")
    }

    /// Shortcut for `lockbox -m get -k KEY`.
    pub fn get(&self, key: &str) -> Output {
        self.cmd()
            .args(["-m", "get", "-k", key])
            .output()
            .expect("failed to run lockbox -m get")
    }

    /// Shortcut for `lockbox -m del -k KEY`.
    pub fn del(&self, key: &str) -> Output {
        self.cmd()
            .args(["-m", "del", "-k", key])
            .output()
            .expect("failed to run lockbox -m del")
    }

    /// Shortcut for `lockbox -m list`.
    pub fn list(&self) -> Output {
        self.cmd()
            .args(["-m", "list"])
            .output()
            .expect("failed to run lockbox -m list")
    }
}
