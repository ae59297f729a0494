//! Integration tests for contacts commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;

mod common;
use common::{assistant_cmd, init_workspace, run_ok};

#[test]
fn test_add_and_search() {
    let temp = init_workspace();
    run_ok(&temp, &["contacts", "add", "--name", "Anna Petrova", "--phone", "+7 900 111"]);
    run_ok(&temp, &["contacts", "add", "--name", "Boris", "--email", "boris@mail.ru"]);

    let by_name = run_ok(&temp, &["contacts", "search", "anna"]);
    assert_eq!(by_name, "1. Anna Petrova | phone: +7 900 111 | email: -\n");

    let by_phone = run_ok(&temp, &["contacts", "search", "900"]);
    assert!(by_phone.contains("Anna Petrova"));
    assert!(!by_phone.contains("Boris"));

    assistant_cmd()
        .current_dir(temp.path())
        .args(["contacts", "search", "nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found"));
}

#[test]
fn test_export_import_round_trip() {
    let source = init_workspace();
    run_ok(&source, &["contacts", "add", "--name", "Anna", "--phone", "111", "--email", "a@x.io"]);
    run_ok(&source, &["contacts", "add", "--name", "Boris"]);
    run_ok(&source, &["contacts", "add", "--name", "Clara", "--phone", "333"]);
    run_ok(&source, &["contacts", "delete", "1"]);
    run_ok(&source, &["contacts", "export"]);
    let exported = source.path().join("contacts_export.csv");

    let target = init_workspace();
    let stdout = run_ok(&target, &["contacts", "import", exported.to_str().unwrap()]);
    assert!(stdout.contains("Imported 2 contacts"));

    let listing = run_ok(&target, &["contacts", "list"]);
    assert_eq!(
        listing,
        "1. Boris | phone: - | email: -\n2. Clara | phone: 333 | email: -\n"
    );
}

#[test]
fn test_edit_ignores_empty_values() {
    let temp = init_workspace();
    run_ok(&temp, &["contacts", "add", "--name", "Anna", "--phone", "111"]);

    run_ok(&temp, &["contacts", "edit", "1", "--phone", "", "--email", "anna@x.io"]);

    let view = run_ok(&temp, &["contacts", "view", "1"]);
    assert_eq!(view, "Name: Anna\nPhone: 111\nEmail: anna@x.io\n");
}

#[test]
fn test_store_uses_canonical_field_names() {
    let temp = init_workspace();
    run_ok(&temp, &["contacts", "add", "--name", "Anna"]);

    let stored = fs::read_to_string(temp.path().join("contacts.json")).unwrap();
    assert_eq!(
        stored,
        "[\n  {\n    \"id\": 1,\n    \"name\": \"Anna\",\n    \"phone\": null,\n    \"email\": null\n  }\n]\n"
    );
}

#[test]
fn test_legacy_store_loads() {
    let temp = init_workspace();
    fs::write(
        temp.path().join("contacts.json"),
        r#"[{"contact_id": 5, "name": "Legacy", "phone": "1", "email": null}]"#,
    )
    .unwrap();

    run_ok(&temp, &["contacts", "add", "--name", "New"]);

    let listing = run_ok(&temp, &["contacts", "list"]);
    assert!(listing.contains("5. Legacy"));
    assert!(listing.contains("6. New"));
}
