mod common;

use common::*;

#[test]
fn join_json_emits_row_events_and_complete() {
    let env = TestEnv::new();

    let result = env.ok(&[
        "join",
        "--username",
        "bob",
        "--track",
        "design",
        "--level",
        "Mid",
        "--json",
    ]);

    let events = result.json_lines();
    assert_eq!(events.len(), 6);
    for row in &events[..5] {
        assert_eq!(row["event"], "row");
        assert_eq!(row["command"], "join");
        assert_eq!(row["username"], "bob");
        assert_eq!(row["level"], "Mid");
    }
    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["success"], true);
    assert_eq!(last["appended"], 5);
}

#[test]
fn error_json_uses_error_kind_as_code() {
    let env = TestEnv::new();
    env.join("carol", "tech", "Mid", &[]);

    let result = env.run(&[
        "earn",
        "--username",
        "carol",
        "--track",
        "tech",
        "--badge",
        "nonexistent_badge",
        "--json",
    ]);

    assert_eq!(result.exit_code, 1);
    let events = result.json_lines();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "error");
    assert_eq!(events[0]["command"], "earn");
    assert_eq!(events[0]["code"], "unknown_badge");
    assert!(events[0]["message"]
        .as_str()
        .unwrap()
        .contains("nonexistent_badge"));
}

#[test]
fn salary_json_carries_breakdown() {
    let env = TestEnv::new();
    env.join("alice", "tech", "Mid", &[&badge("tech", "bronze", "Senior", 1)]);

    let result = env.ok(&[
        "--json",
        "salary",
        "--username",
        "alice",
        "--track",
        "tech",
    ]);

    let data = &result.json_lines()[0];
    assert_eq!(data["event"], "data");
    assert_eq!(data["user"]["username"], "alice");
    assert_eq!(data["level"], "Mid");
    assert_eq!(data["base"], 30000.0);
    assert_eq!(data["shortfall"], 0.0);
    assert_eq!(data["next_level_credit"], 1500.0);
    assert_eq!(data["salary"], 31500.0);
}

#[test]
fn logs_stay_off_stdout() {
    let env = TestEnv::new();

    let result = env.ok(&[
        "-vvv",
        "join",
        "--username",
        "alice",
        "--track",
        "tech",
        "--level",
        "Junior",
        "--json",
    ]);

    assert_eq!(result.json_lines().len(), 2);
    assert!(result.stderr.contains("action committed"), "{}", result.stderr);
}

#[test]
fn check_json_reports_data_then_complete() {
    let env = TestEnv::new();

    let result = env.ok(&["check", "--json"]);

    let events = result.json_lines();
    assert_eq!(events[0]["event"], "data");
    assert_eq!(events[0]["grid_entries"], 10);
    assert_eq!(events[0]["issues"].as_array().unwrap().len(), 0);
    assert_eq!(events[1]["event"], "complete");
}
