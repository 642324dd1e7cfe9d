//! Smoke tests to verify command wiring
//!
//! None of these need a database: they cover help text, argument validation
//! and `search --explain`, which plans a query without connecting.

use assert_cmd::Command;
use predicates::prelude::*;

fn lightbnb() -> Command {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    // Host log filters would otherwise leak into stderr
    cmd.env_remove("RUST_LOG");
    cmd
}

// === Help Tests ===

#[test]
fn test_top_level_help_lists_commands() {
    lightbnb()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("reservations"));
}

#[test]
fn test_search_help() {
    lightbnb()
        .args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimum nightly price in cents"));
}

#[test]
fn test_users_get_help() {
    lightbnb()
        .args(["users", "get", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email address of the user"));
}

#[test]
fn test_properties_add_help() {
    lightbnb()
        .args(["properties", "add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cost_per_night in cents"));
}

// === Argument Validation Tests ===

#[test]
fn test_users_get_requires_email_or_id() {
    lightbnb().args(["users", "get"]).assert().failure();
}

#[test]
fn test_users_get_rejects_both_email_and_id() {
    lightbnb()
        .args(["users", "get", "--email", "a@b.c", "--id", "1"])
        .assert()
        .failure();
}

#[test]
fn test_reservations_requires_guest_id() {
    lightbnb().arg("reservations").assert().failure();
}

// === Search Explain Tests ===

#[test]
fn test_search_explain_without_filters() {
    lightbnb()
        .args(["search", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GROUP BY properties.id"))
        .stdout(predicate::str::contains("WHERE").not())
        .stdout(predicate::str::contains("$1 = 10"));
}

#[test]
fn test_search_explain_city_and_rating() {
    lightbnb()
        .args([
            "search",
            "--explain",
            "--city",
            "van",
            "--min-rating",
            "4",
            "--limit",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("WHERE properties.city LIKE $1"))
        .stdout(predicate::str::contains("AND property_reviews.rating >= $2"))
        .stdout(predicate::str::contains("LIMIT $3"))
        .stdout(predicate::str::contains("$1 = \"%van%\""))
        .stdout(predicate::str::contains("$3 = 5"));
}

#[test]
fn test_search_explain_json_normalizes_prices() {
    let output = lightbnb()
        .args([
            "--format",
            "json",
            "search",
            "--explain",
            "--min-price",
            "5000",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["params"], serde_json::json!([50.0, 10]));
    assert_eq!(plan["limit"], 10);
}

#[test]
fn test_search_explain_reads_filters_from_stdin() {
    lightbnb()
        .args(["search", "--explain", "--filters-json", "-"])
        .write_stdin(r#"{"owner_id": 7, "unknown_key": true}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("WHERE properties.owner_id = $1"))
        .stdout(predicate::str::contains("$1 = 7"));
}
