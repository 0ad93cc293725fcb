use assert_cmd::Command;
use predicates::prelude::*;

fn tzdigest() -> Command {
    let mut cmd = Command::cargo_bin("tzdigest").unwrap();
    cmd.env_remove("TZDIGEST_ENDPOINT")
        .env_remove("TZDIGEST_TOKEN")
        .env_remove("TZDIGEST_WINDOW")
        .env_remove("TZDIGEST_TIMEOUT");
    cmd
}

// ============================================================
// Zone table
// ============================================================

#[test]
fn test_list_zones() {
    tzdigest()
        .arg("--list-zones")
        .assert()
        .success()
        .stdout(predicate::str::contains("UTC\t"))
        .stdout(predicate::str::contains("America/New_York"));
}

#[test]
fn test_list_zones_json() {
    let output = tzdigest()
        .args(["--list-zones", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let groups = parsed.as_array().unwrap();
    let lisbon = serde_json::Value::from("Europe/Lisbon");
    assert!(groups
        .iter()
        .any(|g| g["label"] == "WET" && g["members"].as_array().unwrap().contains(&lisbon)));
}

// ============================================================
// Dry run
// ============================================================

#[test]
fn test_dry_run_weekly() {
    tzdigest()
        .args(["--dry-run", "--at", "2026-02-09T09:05:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UTC\tEtc/UTC\tweekly_at_9A\tsent"));
}

#[test]
fn test_dry_run_json_report() {
    let output = tzdigest()
        .args(["--dry-run", "--json", "--at", "2026-02-09T21:10:00Z"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let dispatches = report["dispatches"].as_array().unwrap();
    assert!(dispatches.iter().any(|d| d["group"] == "ET"
        && d["zone"] == "America/New_York"
        && d["kind"] == "daily_at_4P"
        && d["status"] == "delivered"));
    assert!(dispatches
        .iter()
        .all(|d| d["kind"] != "weekly_at_9A" || d["group"] != "ET"));
}

#[test]
fn test_dry_run_quiet_instant() {
    tzdigest()
        .args(["--dry-run", "--window", "1", "--at", "2026-02-10T12:37:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_event_is_accepted() {
    tzdigest()
        .args([
            "--dry-run",
            "--at",
            "2026-02-10T12:37:00Z",
            "--event",
            r#"{"source":"aws.events"}"#,
        ])
        .assert()
        .success();
}

// ============================================================
// Delivery
// ============================================================

#[test]
fn test_unreachable_endpoint_still_succeeds() {
    tzdigest()
        .args([
            "--endpoint",
            "http://127.0.0.1:9/digest",
            "--token",
            "t",
            "--timeout",
            "2",
            "--at",
            "2026-02-09T09:05:00Z",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("UTC\tEtc/UTC\tweekly_at_9A\tfailed"));
}

#[test]
fn test_endpoint_from_env() {
    tzdigest()
        .env("TZDIGEST_ENDPOINT", "http://127.0.0.1:9/digest")
        .args(["--timeout", "2", "--at", "2026-02-10T12:37:00Z", "--window", "1"])
        .assert()
        .success();
}

// ============================================================
// Error cases
// ============================================================

#[test]
fn test_missing_endpoint() {
    tzdigest()
        .args(["--at", "2026-02-09T09:05:00Z"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--endpoint"));
}

#[test]
fn test_bad_endpoint() {
    tzdigest()
        .args(["--endpoint", "ftp://example.com", "--at", "2026-02-09T09:05:00Z"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported scheme"));
}

#[test]
fn test_bad_timestamp() {
    tzdigest()
        .args(["--dry-run", "--at", "next tuesday"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid --at timestamp"));
}

#[test]
fn test_bad_window() {
    tzdigest()
        .args(["--dry-run", "--window", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("window width"));
}

#[test]
fn test_zero_timeout_is_rejected() {
    tzdigest()
        .args(["--dry-run", "--timeout", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--timeout"));
}

#[test]
fn test_zero_timeout_from_env_is_rejected() {
    tzdigest()
        .env("TZDIGEST_TIMEOUT", "0")
        .args(["--dry-run", "--at", "2026-02-10T12:30:00Z"])
        .assert()
        .code(2);
}
