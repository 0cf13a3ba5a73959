//! End-to-end runs of the `agy` binary against a temporary project.

use std::path::Path;
use std::process::Command;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;

fn project() -> TempDir {
    let temp = TempDir::new().expect("tempdir should create");
    let agency = temp.path().join(".agency");
    std::fs::create_dir(&agency).expect(".agency should create");

    let workflow = json!({
        "id": "wf-acme",
        "client_id": "cli-acme",
        "name": "Acme onboarding",
        "current_module": "mod-tracking",
        "modules": [
            {
                "id": "mod-tracking",
                "name": "Tracking",
                "position": 1,
                "steps": [
                    {
                        "id": "stp-pixel",
                        "name": "Install pixel",
                        "status": "done",
                        "order_index": 2,
                        "checklist": [
                            { "id": "chk-purchase", "name": "Purchase event fires" }
                        ]
                    },
                    { "id": "stp-ga4", "name": "GA4 property", "status": "todo", "order_index": 1 }
                ],
                "gate": {
                    "id": "gat-tracking",
                    "name": "Tracking verified",
                    "conditions": ["Pixel fires on purchase"],
                    "status": "pending"
                }
            },
            {
                "id": "mod-creative",
                "name": "Creative",
                "position": 2,
                "steps": []
            }
        ]
    });
    std::fs::write(
        agency.join("workflow.json"),
        serde_json::to_string_pretty(&workflow).expect("workflow should serialize"),
    )
    .expect("snapshot should write");
    temp
}

fn agy(root: &Path, args: &[&str]) -> (bool, Value, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_agy"))
        .current_dir(root)
        .env("XDG_CONFIG_HOME", root.join("xdg"))
        .env_remove("AGENCY_LOG")
        .args(["--format", "json", "--actor", "usr-dana"])
        .args(args)
        .output()
        .expect("agy should run");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let value = serde_json::from_str(&stdout).unwrap_or(Value::Null);
    (output.status.success(), value, stderr)
}

fn trail_lines(root: &Path) -> Vec<Value> {
    let raw =
        std::fs::read_to_string(root.join(".agency/trail/wf-acme.jsonl")).unwrap_or_default();
    raw.lines()
        .map(|line| serde_json::from_str(line).expect("trail line should parse"))
        .collect()
}

#[test]
fn gate_check_reports_issues_in_step_order() {
    let temp = project();
    let (ok, out, _) = agy(temp.path(), &["gate", "check", "mod-tracking"]);

    assert!(ok);
    assert_eq!(out["validation"]["status"], "pending");
    assert_eq!(
        out["validation"]["issues"],
        json!([
            "Step \"Install pixel\" has 1 incomplete checklist item(s)",
            "Step \"GA4 property\" is not done (status: todo)"
        ])
    );
    assert_eq!(out["advanceable"], false);
    assert_eq!(
        out["blocking_reason"]["message"],
        "Step \"Install pixel\" has 1 incomplete checklist item(s)"
    );
    assert!(trail_lines(temp.path()).is_empty());
}

#[test]
fn gate_check_lists_steps_in_board_order() {
    let temp = project();
    let (ok, out, _) = agy(temp.path(), &["gate", "check", "mod-tracking"]);

    assert!(ok);
    assert_eq!(out["steps"][0]["id"], "stp-ga4");
    assert_eq!(out["steps"][0]["satisfied"], false);
    assert_eq!(out["steps"][1]["id"], "stp-pixel");
    assert_eq!(out["steps"][1]["checklist_done"], 0);
    assert_eq!(out["steps"][1]["checklist_total"], 1);
}

#[test]
fn completing_work_passes_gate_and_advances() {
    let temp = project();
    let root = temp.path();

    let (ok, out, _) = agy(root, &["checklist", "toggle", "chk-purchase"]);
    assert!(ok);
    assert_eq!(out["toggled"]["is_completed"], true);
    assert_eq!(out["toggled"]["completed_by"], "usr-dana");
    assert_eq!(out["gate"]["status"], "pending");

    let (ok, _, stderr) = agy(root, &["module", "advance"]);
    assert!(!ok);
    assert!(stderr.contains("agy error:"));
    assert!(stderr.contains("cannot advance"));
    assert!(stderr.contains("GA4 property"));

    let (ok, out, _) = agy(root, &["step", "status", "stp-ga4", "done"]);
    assert!(ok);
    assert_eq!(out["moved"]["from"], "todo");
    assert_eq!(out["gate"]["status"], "passed");

    let (ok, out, _) = agy(root, &["module", "advance"]);
    assert!(ok);
    assert_eq!(out["advanced"]["to_module"], "mod-creative");

    let ops = trail_lines(root)
        .iter()
        .map(|line| line["op"].as_str().unwrap_or_default().to_string())
        .collect::<Vec<_>>();
    assert_eq!(ops, vec!["toggle", "step_status", "recompute", "advance"]);
}

#[test]
fn manual_failure_holds_until_explicit_recalc() {
    let temp = project();
    let root = temp.path();

    let (ok, out, _) = agy(
        root,
        &["gate", "set", "mod-tracking", "failed", "--reason", "Client rejected tracking"],
    );
    assert!(ok);
    assert_eq!(out["change"]["to"], "failed");
    assert_eq!(out["change"]["reason"], "Client rejected tracking");

    agy(root, &["checklist", "toggle", "chk-purchase"]);
    let (_, out, _) = agy(root, &["step", "status", "stp-ga4", "done"]);
    assert_eq!(out["gate"]["outcome"]["kind"], "preserved");
    assert_eq!(out["gate"]["status"], "failed");

    let (ok, _, _) = agy(root, &["module", "advance"]);
    assert!(!ok);

    let (ok, out, _) = agy(root, &["gate", "recalc", "mod-tracking"]);
    assert!(ok);
    assert_eq!(out["status"], "passed");

    let (ok, _, _) = agy(root, &["module", "advance"]);
    assert!(ok);
}

#[test]
fn manual_block_over_automatic_block_is_kept() {
    let temp = project();
    let root = temp.path();

    let (_, out, _) = agy(root, &["step", "status", "stp-ga4", "blocked"]);
    assert_eq!(out["gate"]["status"], "blocked");

    let (ok, out, _) = agy(
        root,
        &["gate", "set", "mod-tracking", "blocked", "--reason", "Waiting on client access"],
    );
    assert!(ok);
    assert_eq!(out["change"]["from"], "blocked");
    assert_eq!(out["change"]["to"], "blocked");

    agy(root, &["checklist", "toggle", "chk-purchase"]);
    let (_, out, _) = agy(root, &["step", "status", "stp-ga4", "done"]);
    assert_eq!(out["gate"]["outcome"]["kind"], "preserved");
    assert_eq!(out["gate"]["status"], "blocked");

    let ops = trail_lines(root)
        .iter()
        .map(|line| line["op"].as_str().unwrap_or_default().to_string())
        .collect::<Vec<_>>();
    assert!(ops.contains(&"override".to_string()));
}

#[test]
fn workflow_status_lists_modules_in_position_order() {
    let temp = project();
    let (ok, out, _) = agy(temp.path(), &["workflow", "status"]);

    assert!(ok);
    assert_eq!(out["workflow_id"], "wf-acme");
    assert_eq!(out["modules"][0]["id"], "mod-tracking");
    assert_eq!(out["modules"][0]["status"], "in_progress");
    assert_eq!(out["modules"][0]["current"], true);
    assert_eq!(out["modules"][1]["status"], "not_started");
    assert_eq!(out["modules"][1]["advanceable"], true);
}

#[test]
fn unknown_module_is_an_error() {
    let temp = project();
    let (ok, _, stderr) = agy(temp.path(), &["gate", "check", "mod-missing"]);
    assert!(!ok);
    assert!(stderr.contains("mod-missing"));
}

#[test]
fn project_config_sets_issue_limit() {
    let temp = project();
    std::fs::write(
        temp.path().join(".agency/config.toml"),
        "[general]\nissue_limit = 1\n",
    )
    .expect("config should write");

    let (ok, out, _) = agy(temp.path(), &["gate", "check", "mod-tracking"]);
    assert!(ok);
    assert_eq!(out["validation"]["issues"].as_array().map(Vec::len), Some(1));
}

#[test]
fn project_dotenv_is_loaded_from_project_root() {
    let temp = project();
    std::fs::write(temp.path().join(".env"), "AGENCY_GENERAL__ISSUE_LIMIT=1\n")
        .expect(".env should write");
    let nested = temp.path().join("reports");
    std::fs::create_dir(&nested).expect("subdir should create");

    let (ok, out, _) = agy(&nested, &["gate", "check", "mod-tracking"]);
    assert!(ok);
    assert_eq!(out["validation"]["issues"].as_array().map(Vec::len), Some(1));
}

#[test]
fn schema_prints_workflow_schema_without_project() {
    let temp = TempDir::new().expect("tempdir should create");
    let (ok, out, _) = agy(temp.path(), &["schema"]);
    assert!(ok);
    assert_eq!(out["title"], "Workflow");
}
