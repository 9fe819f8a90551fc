//! Integration tests for the access-ticket CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

struct Workspace {
    temp_dir: TempDir,
    config: PathBuf,
}

impl Workspace {
    fn new(config: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, config).unwrap();
        Self {
            temp_dir,
            config: path,
        }
    }

    fn seeded() -> Self {
        Self::new("")
    }

    fn data_dir(&self) -> PathBuf {
        self.temp_dir.path().join("data")
    }

    #[allow(deprecated)]
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("access-ticket").unwrap();
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--config")
            .arg(&self.config)
            .arg("--no-color");
        cmd
    }

    fn json(&self, args: &[&str]) -> Value {
        let output = self.cmd().arg("--json").args(args).assert().success();
        serde_json::from_slice(&output.get_output().stdout).unwrap()
    }

    fn submit(&self) -> Value {
        self.json(&[
            "submit",
            "--name",
            "Ahmed",
            "--company",
            "Jawwal",
            "--rack",
            "Rack 1",
            "--purpose",
            "maint",
        ])
    }
}

#[test]
fn test_first_run_lists_seed_tickets() {
    let ws = Workspace::seeded();
    let tickets = ws.json(&["list"]);

    let references: Vec<_> = tickets
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["referenceCode"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(references, vec!["JW-ALPHA", "JW-BETA", "JW-GAMMA"]);
}

#[test]
fn test_seeding_can_be_disabled() {
    let ws = Workspace::new("[storage]\nseed_on_first_run = false\n");
    ws.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tickets found"));
}

#[test]
fn test_submit_lock_then_edit_is_refused() {
    let ws = Workspace::seeded();

    let created = ws.submit();
    let reference = created["reference_code"].as_str().unwrap().to_string();
    assert!(reference.starts_with("JW-"));
    assert_eq!(created["ticket"]["status"], "open");
    assert_eq!(created["ticket"]["history"].as_array().unwrap().len(), 1);
    assert_eq!(created["ticket"]["history"][0]["action"], "Ticket Created");

    let locked = ws.json(&["toggle-lock", reference.as_str()]);
    assert_eq!(locked["ticket"]["status"], "locked");
    assert_eq!(locked["ticket"]["history"].as_array().unwrap().len(), 2);

    ws.cmd()
        .args(["edit", reference.as_str(), "--company", "Other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is locked and cannot be edited"));

    let shown = ws.json(&["show", reference.as_str()]);
    assert_eq!(shown["company"], "Jawwal");
    assert_eq!(shown["history"].as_array().unwrap().len(), 2);
}

#[test]
fn test_new_tickets_are_listed_first() {
    let ws = Workspace::seeded();
    let created = ws.submit();

    let tickets = ws.json(&["list"]);
    assert_eq!(tickets[0]["id"], created["ticket"]["id"]);
    assert_eq!(tickets.as_array().unwrap().len(), 4);
}

#[test]
fn test_submit_missing_field_fails() {
    let ws = Workspace::seeded();
    ws.cmd()
        .args(["submit", "--name", "Ahmed", "--company", "Jawwal", "--purpose", "maint"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required field: rack"));
}

#[test]
fn test_edit_open_ticket() {
    let ws = Workspace::seeded();

    let edited = ws.json(&[
        "edit",
        "JW-ALPHA",
        "--rack",
        "Rack 7",
        "--staff",
        "external:Sarah Connor:P-1",
    ]);
    assert_eq!(edited["ticket"]["rack"], "Rack 7");
    assert_eq!(edited["ticket"]["additionalStaff"][0]["role"], "external");
    assert_eq!(
        edited["ticket"]["history"].as_array().unwrap().last().unwrap()["action"],
        "Information Edited"
    );
}

#[test]
fn test_delete_removes_ticket() {
    let ws = Workspace::seeded();

    ws.cmd()
        .args(["delete", "JW-GAMMA", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted ticket JW-GAMMA"));

    let tickets = ws.json(&["list"]);
    assert!(
        tickets
            .as_array()
            .unwrap()
            .iter()
            .all(|t| t["referenceCode"] != "JW-GAMMA")
    );

    ws.cmd()
        .args(["delete", "JW-GAMMA", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ticket not found"));
}

#[test]
fn test_show_lists_history_newest_first() {
    let ws = Workspace::seeded();
    let output = ws.cmd().args(["show", "JW-GAMMA"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let locked_at = stdout.find("Security Lock Applied").unwrap();
    let created_at = stdout.find("Ticket Created").unwrap();
    assert!(locked_at < created_at);
}

#[test]
fn test_corrupt_snapshot_falls_back_to_seed_set() {
    let ws = Workspace::seeded();
    std::fs::create_dir_all(ws.data_dir()).unwrap();
    std::fs::write(ws.data_dir().join("jawwal_tickets.json"), "{oops").unwrap();

    ws.cmd()
        .args(["--json", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("corrupt"));

    let kept = std::fs::read_to_string(ws.data_dir().join("jawwal_tickets.corrupt.json")).unwrap();
    assert_eq!(kept, "{oops");
}

#[test]
fn test_changes_survive_restart() {
    let ws = Workspace::seeded();
    ws.json(&["toggle-lock", "JW-ALPHA"]);

    let snapshot: Value = serde_json::from_str(
        &std::fs::read_to_string(ws.data_dir().join("jawwal_tickets.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(snapshot["schemaVersion"], 1);

    let shown = ws.json(&["show", "jw-alpha"]);
    assert_eq!(shown["status"], "locked");
    assert_eq!(
        shown["history"].as_array().unwrap().last().unwrap()["action"],
        "Security Lock Applied"
    );
}
