use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("tasktracker-{nanos}-{file_name}"))
}

fn write_store(path: &PathBuf, tasks: serde_json::Value) {
    std::fs::write(path, serde_json::to_string_pretty(&tasks).unwrap()).unwrap();
}

#[test]
fn clear_command_removes_completed_tasks_only() {
    let exe = env!("CARGO_BIN_EXE_task_cli");
    let store_path = temp_path("cli-clear.json");

    write_store(
        &store_path,
        serde_json::json!([
            {
                "id": 1,
                "description": "Done one",
                "priority": "high",
                "completed": true,
                "created_at": "2026-08-25T09:00:00Z",
                "completed_at": "2026-08-25T10:00:00Z"
            },
            {
                "id": 2,
                "description": "Still open",
                "priority": "medium",
                "completed": false,
                "created_at": "2026-08-25T09:01:00Z"
            },
            {
                "id": 3,
                "description": "Done two",
                "priority": "low",
                "completed": true,
                "created_at": "2026-08-25T09:02:00Z",
                "completed_at": "2026-08-25T10:01:00Z"
            }
        ]),
    );

    let output = Command::new(exe)
        .arg("clear")
        .env("TASKTRACKER_STORE_PATH", &store_path)
        .output()
        .expect("failed to run clear command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Removed 2 completed task(s)."));

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    std::fs::remove_file(&store_path).ok();

    let tasks = stored.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], 2);
    assert_eq!(tasks[0]["description"], "Still open");
}

#[test]
fn clear_command_persists_even_when_nothing_to_remove() {
    let exe = env!("CARGO_BIN_EXE_task_cli");
    let store_path = temp_path("cli-clear-noop.json");

    let output = Command::new(exe)
        .arg("clear")
        .env("TASKTRACKER_STORE_PATH", &store_path)
        .output()
        .expect("failed to run clear command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Removed 0 completed task(s)."));

    let content = std::fs::read_to_string(&store_path).unwrap();
    std::fs::remove_file(&store_path).ok();

    let stored: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(stored.as_array().unwrap().is_empty());
}

#[test]
fn clear_command_json_reports_removed_count() {
    let exe = env!("CARGO_BIN_EXE_task_cli");
    let store_path = temp_path("cli-clear-json.json");

    write_store(
        &store_path,
        serde_json::json!([
            {
                "id": 1,
                "description": "Done",
                "priority": "low",
                "completed": true,
                "created_at": "2026-08-25T09:00:00Z",
                "completed_at": "2026-08-25T10:00:00Z"
            }
        ]),
    );

    let output = Command::new(exe)
        .args(["clear", "--json"])
        .env("TASKTRACKER_STORE_PATH", &store_path)
        .output()
        .expect("failed to run clear command");

    std::fs::remove_file(&store_path).ok();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(payload["removed"], 1);
}
