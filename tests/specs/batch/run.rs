//! Batch dispatch specs
//!
//! Verify ordering, per-line errors, and the attempt-log summary.

use crate::prelude::*;

const REQUESTS: &str = r#"{"user_name":"alice","message":"one","priority":"high"}
{"user_name":"zed","message":"two"}

{"user_name":"erin","message":"three"}
{"user_name":"dave","message":"four"}
not json
"#;

#[test]
fn batch_reports_each_line_in_order() {
    let project = Project::with_config(FALLBACK_CONFIG);
    let run = project
        .herald()
        .args(&["batch", "--jobs", "3"])
        .stdin(REQUESTS)
        .passes();

    let stdout = run.stdout();
    let lines: Vec<&str> = stdout.lines().collect();
    similar_asserts::assert_eq!(
        lines[..4].to_vec(),
        vec![
            "1: delivered to alice via sms after 2 attempts",
            "2: error: user not found: zed",
            "4: not delivered to erin: all channels failed after 2 attempts",
            "5: error: invalid channel configuration for user dave: unknown channel: fax",
        ]
    );
    assert!(lines[4].starts_with("6: error: invalid request"), "{}", lines[4]);
    assert_eq!(lines[5], "attempt log: 4 records, 1 delivered, 3 failed");
    assert_eq!(lines.len(), 6);
}

#[test]
fn batch_show_log_prints_every_record() {
    let project = Project::with_config(FALLBACK_CONFIG);
    let run = project
        .herald()
        .args(&["batch", "--show-log"])
        .stdin(REQUESTS)
        .passes();

    let stdout = run.stdout();
    let records: Vec<&str> = stdout
        .lines()
        .skip_while(|line| !line.starts_with("attempt log:"))
        .skip(1)
        .collect();
    assert_eq!(records.len(), 4);
    assert_eq!(records.iter().filter(|r| r.contains("  alice  ")).count(), 2);
    assert_eq!(records.iter().filter(|r| r.contains("  erin  ")).count(), 2);
}

#[test]
fn batch_reads_requests_from_file() {
    let project = Project::with_config(FALLBACK_CONFIG);
    project.file(
        "requests.jsonl",
        "{\"user_name\":\"anna\",\"message\":\"a\"}\n{\"user_name\":\"anna\",\"message\":\"b\"}\n",
    );
    project
        .herald()
        .args(&["batch", "requests.jsonl"])
        .passes()
        .stdout_eq(
            "1: delivered to anna via sms after 1 attempt\n\
             2: delivered to anna via sms after 1 attempt\n\
             attempt log: 2 records, 2 delivered, 0 failed\n",
        );
}

#[test]
fn batch_missing_file_exits_1() {
    let project = Project::with_config(FALLBACK_CONFIG);
    project
        .herald()
        .args(&["batch", "nope.jsonl"])
        .exits_with(1)
        .stderr_has("failed to read requests from nope.jsonl");
}

#[test]
fn batch_json_emits_one_object_per_line() {
    let project = Project::with_config(FALLBACK_CONFIG);
    let run = project
        .herald()
        .args(&["batch", "-o", "json", "--show-log"])
        .stdin(REQUESTS)
        .passes();
    let lines = run.json_lines();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0]["line"], 1);
    assert_eq!(lines[0]["result"]["channel_used"], "sms");
    assert_eq!(lines[1]["code"], 4);
    assert_eq!(lines[2]["result"]["success"], false);
    assert_eq!(lines[3]["code"], 5);
    assert_eq!(lines[4]["code"], 1);

    let log = &lines[5]["log"];
    assert_eq!(log["records"], 4);
    assert_eq!(log["delivered"], 1);
    assert_eq!(log["failed"], 3);
    assert_eq!(log["attempts"].as_array().unwrap().len(), 4);
}

#[test]
fn batch_with_many_concurrent_requests_logs_everything() {
    let project = Project::with_config(FALLBACK_CONFIG);
    let input: String = (0..50)
        .map(|i| format!("{{\"user_name\":\"alice\",\"message\":\"m{i}\"}}\n"))
        .collect();
    project
        .herald()
        .args(&["batch", "--jobs", "8"])
        .stdin(&input)
        .passes()
        .stdout_has("attempt log: 100 records, 50 delivered, 50 failed");
}
