use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn frontdesk_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_frontdesk"))
}

fn run(tmp: &TempDir, args: &[&str]) -> std::process::Output {
    frontdesk_cmd()
        .current_dir(tmp.path())
        .args(args)
        .output()
        .unwrap()
}

fn init_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let output = run(&tmp, &["init"]);
    assert!(output.status.success());
    tmp
}

fn add_client_id(tmp: &TempDir, name: &str, purpose: &str, department: &str) -> String {
    let output = run(
        tmp,
        &[
            "add",
            name,
            "--purpose",
            purpose,
            "--department",
            department,
            "--json",
        ],
    );
    assert!(output.status.success());
    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    record["id"].as_str().unwrap().to_string()
}

fn store_state(tmp: &TempDir) -> serde_json::Value {
    let raw = fs::read_to_string(tmp.path().join(".frontdesk/store.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_init_creates_frontdesk_directory() {
    let tmp = TempDir::new().unwrap();

    let output = run(&tmp, &["init"]);

    assert!(output.status.success());
    assert!(tmp.path().join(".frontdesk").exists());
    assert!(tmp.path().join(".frontdesk/store.json").exists());
}

#[test]
fn test_init_twice_fails() {
    let tmp = init_project();

    let output = run(&tmp, &["init"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Already initialized"));
}

#[test]
fn test_add_without_init_fails() {
    let tmp = TempDir::new().unwrap();

    let output = run(&tmp, &["add", "Alice", "--department", "HR"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not in a frontdesk project"));
}

#[test]
fn test_add_blank_name_is_rejected() {
    let tmp = init_project();

    let output = run(&tmp, &["add", "   ", "--department", "HR"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("client name"));

    let state = store_state(&tmp);
    assert_eq!(state["clientQueue"].as_array().unwrap().len(), 0);
}

#[test]
fn test_full_reception_workflow() {
    let tmp = init_project();

    // Submit Alice for Billing at HR.
    let id = add_client_id(&tmp, "Alice", "Billing", "hr");

    let state = store_state(&tmp);
    let queue = state["clientQueue"].as_array().unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0]["status"], "new");
    assert_eq!(queue[0]["department"], "HR");
    assert!(queue[0]["startTime"].is_null());

    // Start serving by id prefix.
    let output = run(&tmp, &["start", &id[..7]]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Started serving Alice"));

    let state = store_state(&tmp);
    let queue = state["clientQueue"].as_array().unwrap();
    assert_eq!(queue[0]["status"], "in-progress");
    assert!(!queue[0]["startTime"].is_null());
    assert!(queue[0]["completionTime"].is_null());

    // Complete: the record moves to the completed list.
    let output = run(&tmp, &["complete", &id]);
    assert!(output.status.success());

    let state = store_state(&tmp);
    assert_eq!(state["clientQueue"].as_array().unwrap().len(), 0);
    let completed = state["completedClients"].as_array().unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0]["status"], "completed");
    assert!(!completed[0]["completionTime"].is_null());
}

#[test]
fn test_advance_unknown_id_is_silent() {
    let tmp = init_project();
    add_client_id(&tmp, "Alice", "Billing", "HR");

    let output = run(&tmp, &["start", "deadbee"]);

    assert!(output.status.success());
    let state = store_state(&tmp);
    assert_eq!(state["clientQueue"][0]["status"], "new");
}

#[test]
fn test_remove_takes_only_the_named_client() {
    let tmp = init_project();
    let alice = add_client_id(&tmp, "Alice", "Billing", "HR");
    add_client_id(&tmp, "Bob", "Meeting", "IT");

    let output = run(&tmp, &["remove", &alice[..7]]);
    assert!(output.status.success());

    let state = store_state(&tmp);
    let queue = state["clientQueue"].as_array().unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0]["name"], "Bob");
}

#[test]
fn test_clear_requires_force_when_not_interactive() {
    let tmp = init_project();
    add_client_id(&tmp, "Alice", "Billing", "HR");

    let output = run(&tmp, &["clear"]);
    assert!(!output.status.success());
    assert_eq!(store_state(&tmp)["clientQueue"].as_array().unwrap().len(), 1);

    let output = run(&tmp, &["clear", "--force"]);
    assert!(output.status.success());
    assert_eq!(store_state(&tmp)["clientQueue"].as_array().unwrap().len(), 0);
}

#[test]
fn test_clear_keeps_completed_clients() {
    let tmp = init_project();
    let id = add_client_id(&tmp, "Alice", "Billing", "HR");
    run(&tmp, &["start", &id]);
    run(&tmp, &["complete", &id]);
    add_client_id(&tmp, "Bob", "Meeting", "IT");

    let output = run(&tmp, &["clear", "--force"]);
    assert!(output.status.success());

    let state = store_state(&tmp);
    assert_eq!(state["clientQueue"].as_array().unwrap().len(), 0);
    assert_eq!(state["completedClients"].as_array().unwrap().len(), 1);
}

#[test]
fn test_list_filters_by_status() {
    let tmp = init_project();
    let alice = add_client_id(&tmp, "Alice", "Billing", "HR");
    add_client_id(&tmp, "Bob", "Meeting", "IT");
    run(&tmp, &["start", &alice]);

    let output = run(&tmp, &["list", "--status", "waiting"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Bob"));
    assert!(!stdout.contains("Alice"));

    let output = run(&tmp, &["list", "--status", "in-progress", "--json"]);
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 1);
    assert_eq!(records[0]["name"], "Alice");
}

#[test]
fn test_dashboard_requires_selection_first() {
    let tmp = init_project();
    add_client_id(&tmp, "Alice", "Billing", "HR");

    let output = run(&tmp, &["dashboard", "show"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("select a department"));
}

#[test]
fn test_dashboard_filters_by_department() {
    let tmp = init_project();
    add_client_id(&tmp, "Alice", "Billing", "HR");

    let output = run(&tmp, &["dashboard", "select", "hr"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("HR"));

    let output = run(&tmp, &["dashboard", "show"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 client(s)"));
    assert!(stdout.contains("Alice"));

    run(&tmp, &["dashboard", "select", "IT"]);
    let output = run(&tmp, &["dashboard", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 client(s)"));
    assert!(stdout.contains("No clients waiting for this department."));
}

#[test]
fn test_dashboard_completion_stays_in_queue() {
    let tmp = init_project();
    let id = add_client_id(&tmp, "Alice", "Billing", "HR");
    run(&tmp, &["dashboard", "select", "HR"]);

    run(&tmp, &["dashboard", "start", &id[..7]]);
    let output = run(&tmp, &["dashboard", "complete", &id[..7]]);
    assert!(output.status.success());

    let state = store_state(&tmp);
    let queue = state["clientQueue"].as_array().unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0]["status"], "completed");
    assert_eq!(state["completedClients"].as_array().unwrap().len(), 0);
}

#[test]
fn test_reception_export_writes_csv() {
    let tmp = init_project();
    add_client_id(&tmp, "Alice", "Billing", "HR");
    add_client_id(&tmp, "Bob", "Meeting", "IT");

    let output = run(&tmp, &["export", "--out", "out.csv"]);
    assert!(output.status.success());

    let csv = fs::read_to_string(tmp.path().join("out.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ID,Name,Purpose,Time,Department,Status"));
    assert!(lines[0].ends_with("Wait Time,Service Time"));
    assert!(csv.contains("\"Alice\""));
    assert!(csv.contains("N/A"));
}

#[test]
fn test_dashboard_export_is_department_scoped() {
    let tmp = init_project();
    add_client_id(&tmp, "Alice", "Billing", "HR");
    add_client_id(&tmp, "Bob", "Meeting", "IT");
    run(&tmp, &["dashboard", "select", "HR"]);

    let output = run(&tmp, &["dashboard", "export"]);
    assert!(output.status.success());

    let csv = fs::read_to_string(tmp.path().join("clients_HR.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "ID,Name,Purpose,Time,Department,Status,Comments");
    assert_eq!(lines.len(), 2);
    assert!(csv.contains("\"Alice\""));
    assert!(!csv.contains("Bob"));
}

#[test]
fn test_daily_report_counts() {
    let tmp = init_project();
    add_client_id(&tmp, "Alice", "Billing", "HR");
    add_client_id(&tmp, "Bob", "Meeting", "HR");
    let carol = add_client_id(&tmp, "Carol", "Delivery", "IT");
    run(&tmp, &["start", &carol]);

    let output = run(&tmp, &["report", "daily"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total Clients: 3"));
    assert!(stdout.contains("Human Resources: 2"));
    assert!(stdout.contains("Information Technology: 1"));
    assert!(stdout.contains("Waiting: 2"));
    assert!(stdout.contains("In Progress: 1"));
}

#[test]
fn test_end_of_day_report_includes_completions() {
    let tmp = init_project();
    let id = add_client_id(&tmp, "Alice", "Billing", "HR");
    run(&tmp, &["start", &id]);
    run(&tmp, &["complete", &id]);
    add_client_id(&tmp, "Bob", "Meeting", "IT");

    let output = run(&tmp, &["report", "end-of-day"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("END OF DAY REPORT"));
    assert!(stdout.contains("Total Clients: 2"));
    assert!(stdout.contains("Completed: 1"));
    assert!(stdout.contains("PERFORMANCE METRICS:"));
    assert!(stdout.contains("Alice - Billing (Completed)"));
}

#[test]
fn test_end_of_day_report_rejects_bad_date() {
    let tmp = init_project();

    let output = run(&tmp, &["report", "end-of-day", "--date", "28/08/2026"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid date"));
}

#[test]
fn test_dashboard_report_is_summary_only() {
    let tmp = init_project();
    add_client_id(&tmp, "Alice", "Billing", "HR");
    run(&tmp, &["dashboard", "select", "HR"]);

    let output = run(&tmp, &["dashboard", "report", "end-of-day"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("END OF DAY REPORT"));
    assert!(!stdout.contains("PERFORMANCE METRICS:"));
}

#[test]
fn test_corrupt_store_degrades_to_empty() {
    let tmp = init_project();
    add_client_id(&tmp, "Alice", "Billing", "HR");
    fs::write(tmp.path().join(".frontdesk/store.json"), "{broken").unwrap();

    let output = run(&tmp, &["list"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No clients in the queue."));
}
