use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// A temporary database plus a steps file for `goal create`.
struct CliTestEnvironment {
    temp_dir: TempDir,
    steps_file: PathBuf,
}

impl CliTestEnvironment {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory");
        let steps_file = temp_dir.path().join("steps.json");
        let steps: Vec<Value> = (1..=5)
            .map(|index| {
                serde_json::json!({
                    "index": index,
                    "title": format!("Step {index}"),
                    "task": format!("Work through part {index}"),
                    "deliverable": "A repository link",
                    "estimated_minutes": 30,
                })
            })
            .collect();
        std::fs::write(&steps_file, serde_json::to_string(&steps).unwrap())
            .expect("Failed to write steps file");
        Self {
            temp_dir,
            steps_file,
        }
    }

    fn db_path(&self) -> PathBuf {
        self.temp_dir.path().join("cli_test.db")
    }

    /// `cadence --no-color --database-file <db>`
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("cadence").expect("Failed to find cadence binary");
        cmd.arg("--no-color")
            .arg("--database-file")
            .arg(self.db_path());
        cmd
    }

    fn create_goal(&self, extra: &[&str]) -> String {
        let output = self
            .cmd()
            .args(["goal", "create", "go", "Write a REST API in Go", "--steps"])
            .arg(&self.steps_file)
            .args(extra)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        extract_id_from_output(&String::from_utf8(output).expect("Invalid UTF-8"))
    }

    fn schedule_json(&self, goal_id: &str, today: &str) -> Value {
        let output = self
            .cmd()
            .args(["--today", today, "schedule", goal_id, "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&output).expect("schedule output is JSON")
    }
}

fn extract_id_from_output(output: &str) -> String {
    output
        .lines()
        .find_map(|line| line.strip_prefix("Created goal with ID: "))
        .map(|id| id.trim().to_string())
        .expect("No goal ID in output")
}

fn write_file(path: &Path, contents: &str) {
    std::fs::write(path, contents).expect("Failed to write file");
}

#[test]
fn test_cli_list_empty_goals() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No goals found."));
}

#[test]
fn test_cli_no_command_lists_goals() {
    let env = CliTestEnvironment::new();
    env.create_goal(&[]);

    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Write a REST API in Go"))
        .stdout(predicate::str::contains("(0/5)"));
}

#[test]
fn test_cli_create_goal() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args(["goal", "create", "nextjs", "Ship a portfolio", "--steps"])
        .arg(&env.steps_file)
        .args(["--deadline", "2025-07-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created goal with ID: 1"))
        .stdout(predicate::str::contains("Ship a portfolio"))
        .stdout(predicate::str::contains("Step 5"));
}

#[test]
fn test_cli_create_goal_rejects_four_steps() {
    let env = CliTestEnvironment::new();
    let short = env.temp_dir.path().join("short.json");
    write_file(
        &short,
        r#"[
            {"index": 1, "title": "a", "task": "t", "deliverable": "d"},
            {"index": 2, "title": "b", "task": "t", "deliverable": "d"},
            {"index": 3, "title": "c", "task": "t", "deliverable": "d"},
            {"index": 4, "title": "d", "task": "t", "deliverable": "d"}
        ]"#,
    );

    env.cmd()
        .args(["goal", "create", "go", "Too short", "--steps"])
        .arg(&short)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create goal"));

    env.cmd()
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No goals found."));
}

#[test]
fn test_cli_create_goal_rejects_unknown_skill() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args(["goal", "create", "rust", "Learn Rust", "--steps"])
        .arg(&env.steps_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid skill type"));
}

#[test]
fn test_cli_schedule_json_wire_shape() {
    let env = CliTestEnvironment::new();
    let goal_id = env.create_goal(&[]);

    let json = env.schedule_json(&goal_id, "2025-06-01");

    assert_eq!(json["goalId"], Value::String(goal_id.clone()));
    let days = json["days"].as_array().unwrap();
    assert_eq!(days.len(), 14);
    assert_eq!(days[0]["date"], "2025-06-01");
    assert_eq!(days[13]["date"], "2025-06-14");

    let counts: Vec<usize> = days
        .iter()
        .map(|day| day["tasks"].as_array().unwrap().len())
        .collect();
    assert_eq!(&counts[..3], &[2, 2, 1]);
    assert!(counts[3..].iter().all(|&count| count == 0));

    let first = &days[0]["tasks"][0];
    assert_eq!(first["index"], 1);
    assert_eq!(first["status"], "scheduled");
    assert_eq!(first["scheduledDate"], "2025-06-01");
    assert_eq!(first["estimatedMinutes"], 30);
    assert_eq!(first["done"], false);
    assert!(first["stepId"].is_string());
    assert_eq!(json["alerts"], Value::Array(vec![]));
}

#[test]
fn test_cli_schedule_markdown_with_alerts() {
    let env = CliTestEnvironment::new();
    let goal_id = env.create_goal(&["--deadline", "2025-06-01"]);

    env.cmd()
        .args(["--today", "2025-06-01", "schedule", &goal_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-06-01 (Sun)"))
        .stdout(predicate::str::contains("_Free day_"))
        .stdout(predicate::str::contains("## Alerts"))
        .stdout(predicate::str::contains(
            "Task scheduled on 2025-06-03 is past the goal deadline (2025-06-01)",
        ));
}

#[test]
fn test_cli_missed_steps_are_moved() {
    let env = CliTestEnvironment::new();
    let goal_id = env.create_goal(&[]);
    env.schedule_json(&goal_id, "2025-06-01");

    // Steps 1 and 2 done on time; 3 to 5 missed.
    for step_id in ["1", "2"] {
        env.cmd()
            .args(["step", "done", step_id])
            .assert()
            .success()
            .stdout(predicate::str::contains("Marked as done"));
    }

    let json = env.schedule_json(&goal_id, "2025-06-10");
    let days = json["days"].as_array().unwrap();
    let indices = |day: &Value| -> Vec<u64> {
        day["tasks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|task| task["index"].as_u64().unwrap())
            .collect()
    };
    assert_eq!(indices(&days[0]), vec![3, 4]);
    assert_eq!(indices(&days[1]), vec![5]);
    assert_eq!(days[0]["tasks"][0]["status"], "scheduled");
}

#[test]
fn test_cli_skip_and_undo() {
    let env = CliTestEnvironment::new();
    env.create_goal(&[]);

    env.cmd()
        .args(["step", "skip", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rescheduled on the next view"));

    env.cmd()
        .args(["step", "done", "4"])
        .assert()
        .success();
    env.cmd()
        .args(["step", "undo", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reopened as scheduled"));

    env.cmd()
        .args(["step", "skip", "404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Step with ID 404 not found"));
}

#[test]
fn test_cli_estimate_and_submit() {
    let env = CliTestEnvironment::new();
    env.create_goal(&[]);

    env.cmd()
        .args(["step", "estimate", "2", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("estimated at 90 min"));

    env.cmd()
        .args(["step", "submit", "2", "https://github.com/learner/api", "--url"])
        .assert()
        .success();

    env.cmd()
        .args(["step", "submit", "2", "not a link", "--url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to submit work"));

    env.cmd()
        .args(["step", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("~90 min"))
        .stdout(predicate::str::contains("<https://github.com/learner/api>"));
}

#[test]
fn test_cli_review_shows_on_step() {
    let env = CliTestEnvironment::new();
    env.create_goal(&[]);

    env.cmd()
        .args(["step", "review", "1"])
        .args(["--keep", "Routes are clearly organised"])
        .args(["--problem", "Handlers ignore request errors"])
        .args(["--try", "Return 400 for malformed JSON"])
        .args(["--next", "Add persistence with SQLite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved review for step 1"));

    env.cmd()
        .args(["step", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_No submission yet._"))
        .stdout(predicate::str::contains("Review"))
        .stdout(predicate::str::contains("Return 400 for malformed JSON"));

    env.cmd()
        .args(["step", "review", "1"])
        .args(["--keep", "Short"])
        .args(["--problem", "Handlers ignore request errors"])
        .args(["--try", "Return 400 for malformed JSON"])
        .args(["--next", "Add persistence with SQLite"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to save review"));
}

#[test]
fn test_cli_delete_requires_confirm() {
    let env = CliTestEnvironment::new();
    let goal_id = env.create_goal(&[]);

    env.cmd()
        .args(["goal", "delete", &goal_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to delete goal"));

    env.cmd()
        .args(["goal", "delete", &goal_id, "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted goal"));

    env.cmd()
        .args(["goal", "show", &goal_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_invalid_today_fails() {
    let env = CliTestEnvironment::new();
    let goal_id = env.create_goal(&[]);

    env.cmd()
        .args(["--today", "06/01/2025", "schedule", &goal_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_cli_unknown_goal_schedule_fails() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args(["--today", "2025-06-01", "schedule", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Goal with ID 99 not found"));
}
