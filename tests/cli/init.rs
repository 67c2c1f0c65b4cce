//! Tests for `--init`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_init_creates_key_pair_and_store() {
    let t = Test::new();

    t.cmd()
        .arg("--init")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("initialized"));

    assert!(t.store_path().exists());
    assert!(t.identity_path().exists());
    let pubkey = std::fs::read_to_string(t.pubkey_path()).unwrap();
    assert!(pubkey.trim().starts_with("age1"));
}

#[cfg(unix)]
#[test]
fn test_init_file_modes() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::init();
    let mode = |p: std::path::PathBuf| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;

    assert_eq!(mode(t.identity_path()), 0o600);
    assert_eq!(mode(t.store_path()), 0o600);
    assert_eq!(mode(t.pubkey_path()), 0o644);
}

#[test]
fn test_init_twice_keeps_existing_files() {
    let t = Test::with_records(&[("db-prod", "s3cr3t!")]);
    let store = t.store_bytes();
    let identity = std::fs::read(t.identity_path()).unwrap();

    let output = t.init_cmd();
    assert_success(&output);
    assert_stderr_contains(&output, "store already exists");

    assert_eq!(t.store_bytes(), store);
    assert_eq!(std::fs::read(t.identity_path()).unwrap(), identity);
    assert_roundtrip(&t, "api", "k3y");
}

#[test]
fn test_init_with_key_runs_operation() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--init", "-k", "db-prod", "--value", "s3cr3t!"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "s3cr3t!\n");

    assert_eq!(stdout(&t.get("db-prod")), "s3cr3t!\n");
}

#[test]
fn test_init_custom_paths() {
    let t = Test::new();
    let dir = t.home.path().join("vaults");
    std::fs::create_dir(&dir).unwrap();
    let store = dir.join("work.box");
    let pubkey = dir.join("work.pub");
    let identity = dir.join("work.key");

    let args = |extra: &[&str]| -> Vec<String> {
        let mut v = vec![
            "-p".to_string(),
            store.display().to_string(),
            "-f".to_string(),
            pubkey.display().to_string(),
            "-i".to_string(),
            identity.display().to_string(),
        ];
        v.extend(extra.iter().map(|s| s.to_string()));
        v
    };

    assert_success(&t.cmd().args(args(&["--init"])).output().unwrap());
    assert!(store.exists() && pubkey.exists() && identity.exists());
    assert!(!t.store_path().exists());

    assert_success(&t.cmd().args(args(&["-k", "jwt", "--value", "tok"])).output().unwrap());
    let output = t.cmd().args(args(&["-m", "get", "-k", "jwt"])).output().unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "tok\n");
}

#[test]
fn test_init_reuses_identity_without_pubkey() {
    let t = Test::init();
    let before = std::fs::read_to_string(t.pubkey_path()).unwrap();
    std::fs::remove_file(t.pubkey_path()).unwrap();

    assert_success(&t.init_cmd());
    assert_eq!(std::fs::read_to_string(t.pubkey_path()).unwrap(), before);
}

#[test]
fn test_init_from_config_file() {
    let t = Test::new();
    let config = t.home.path().join("lockbox.toml");
    std::fs::write(
        &config,
        "store_path = \"~/custom.box\"\nrecord_length = 8\n",
    )
    .unwrap();

    assert_success(&t.cmd().arg("--config").arg(&config).arg("--init").output().unwrap());
    assert!(t.home.path().join("custom.box").exists());

    let output = t
        .cmd()
        .env("LOCKBOX_CONFIG", &config)
        .args(["-k", "short"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end().len(), 8);
}
