//! Tests for error reporting and exit codes.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();
    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();
    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lockbox"));
}

#[test]
fn test_missing_key_is_usage_error() {
    let t = Test::init();
    t.cmd()
        .args(["-m", "get"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--key"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let t = Test::init();
    t.cmd().args(["--bogus"]).assert().code(2);
}

#[test]
fn test_unknown_mode_is_usage_error() {
    let t = Test::init();
    t.cmd().args(["-m", "update", "-k", "a"]).assert().code(2);
}

#[test]
fn test_missing_store_hints_init() {
    let t = Test::new();
    t.cmd()
        .args(["-m", "get", "-k", "a"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--init"));
}

#[test]
fn test_missing_identity() {
    let t = Test::with_records(&[("a", "1")]);
    std::fs::remove_file(t.identity_path()).unwrap();

    let output = t.get("a");
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "no private key");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_foreign_recipient_cannot_decrypt() {
    let t = Test::init();
    std::fs::write(t.pubkey_path(), format!("{}\n", FOREIGN_PUBLIC_KEY)).unwrap();

    let output = t.get("a");
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "decryption failed");
}

#[test]
fn test_corrupt_store() {
    let t = Test::init();
    std::fs::write(t.store_path(), "not an age file").unwrap();

    let output = t.get("a");
    assert_exit_code(&output, 1);
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_invalid_key_rejected() {
    let t = Test::init();
    let before = t.store_bytes();

    let output = t.put("a,b", "v");
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "invalid key");
    assert_eq!(t.store_bytes(), before);
}

#[test]
fn test_length_out_of_range() {
    let t = Test::init();
    for n in ["0", "1025"] {
        t.cmd()
            .args(["-k", "x", "-l", n])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("record_length"));
    }
}

#[test]
fn test_missing_config_file() {
    let t = Test::init();
    t.cmd()
        .args(["-c", "does-not-exist.toml", "-m", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn test_duplicate_message_does_not_leak_values() {
    let t = Test::with_records(&[("db-prod", "s3cr3t!")]);

    let output = t.put("db-prod", "n3w-s3cr3t");
    assert_exit_code(&output, 3);
    let err = stderr(&output);
    assert!(err.contains("db-prod"));
    assert!(!err.contains("s3cr3t"));
}
