//! Tests for the new, get, del and list modes.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_end_to_end_scenario() {
    let t = Test::init();

    assert_roundtrip(&t, "db-prod", "s3cr3t!");

    let output = t.put("db-prod", "other");
    assert_exit_code(&output, 3);
    assert_eq!(stdout(&t.get("db-prod")), "s3cr3t!\n");

    let output = t.del("db-prod");
    assert_success(&output);
    assert_stderr_contains(&output, "removed db-prod");

    let output = t.get("db-prod");
    assert_exit_code(&output, 4);
    assert!(stdout(&output).is_empty());

    let output = t.del("db-prod");
    assert_success(&output);
    assert_stderr_contains(&output, "nothing removed");
}

#[test]
fn test_new_generates_default_length() {
    let t = Test::init();

    let output = t.new_key("generated");
    assert_success(&output);
    let value = stdout(&output);
    let value = value.trim_end_matches('\n');
    assert_eq!(value.len(), 20);
    assert!(!value.contains(','));

    assert_eq!(stdout(&t.get("generated")), format!("{}\n", value));
}

#[test]
fn test_new_with_length() {
    let t = Test::init();

    let output = t.cmd().args(["-k", "long", "-l", "64"]).output().unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end_matches('\n').len(), 64);
}

#[test]
fn test_new_value_from_stdin() {
    let t = Test::init();

    t.cmd()
        .args(["-k", "piped", "--value", "-"])
        .write_stdin("from stdin\nignored\n")
        .assert()
        .success();

    assert_eq!(stdout(&t.get("piped")), "from stdin\n");
}

#[test]
fn test_empty_value_is_found() {
    let t = Test::init();

    assert_success(&t.put("blank", ""));
    let output = t.get("blank");
    assert_exit_code(&output, 0);
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn test_value_with_commas() {
    let t = Test::init();
    assert_roundtrip(&t, "dsn", "host=db,port=5432,user=app");
}

#[test]
fn test_list_in_insertion_order() {
    let t = Test::with_records(STANDARD_RECORDS);

    let output = t.list();
    assert_success(&output);
    let expected: Vec<&str> = STANDARD_RECORDS.iter().map(|(k, _)| *k).collect();
    assert_eq!(stdout(&output).lines().collect::<Vec<_>>(), expected);
}

#[test]
fn test_list_empty_store() {
    let t = Test::init();
    t.cmd()
        .args(["-m", "list"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_get_is_read_only() {
    let t = Test::with_records(STANDARD_RECORDS);
    let before = t.store_bytes();

    for (k, v) in STANDARD_RECORDS {
        assert_eq!(stdout(&t.get(k)), format!("{}\n", v));
    }
    assert_success(&t.list());
    assert_eq!(t.store_bytes(), before);
}

#[test]
fn test_del_miss_leaves_store_untouched() {
    let t = Test::with_records(&[("a", "1")]);
    let before = t.store_bytes();

    assert_success(&t.del("b"));
    assert_eq!(t.store_bytes(), before);
}

#[test]
fn test_exact_key_match() {
    let t = Test::with_records(&[("db.*", "pattern"), ("db-prod", "literal")]);

    assert_eq!(stdout(&t.get("db.*")), "pattern\n");
    assert_eq!(stdout(&t.get("db-prod")), "literal\n");
    assert_exit_code(&t.get("db"), 4);
    assert_exit_code(&t.get("DB-PROD"), 4);
}

#[test]
fn test_store_holds_no_plaintext() {
    let t = Test::with_records(&[("db-prod", "s3cr3t!")]);

    let store = String::from_utf8_lossy(&t.store_bytes()).to_string();
    assert!(store.starts_with("-----BEGIN AGE ENCRYPTED FILE-----"));
    assert!(!store.contains("s3cr3t!"));
    assert!(!store.contains("db-prod"));

    let mut names: Vec<_> = std::fs::read_dir(t.home.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    assert_eq!(names, [".lockbox", ".lockbox.key", ".lockbox.pub"]);
}
