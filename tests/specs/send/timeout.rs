//! Per-send timeout specs

use crate::prelude::*;

const SLOW_CONFIG: &str = r#"
[settings]
success_rate = 1.0
latency_ms = 2000

[[users]]
name = "alice"
preferred = "email"
available = ["email", "sms"]
"#;

#[test]
fn slow_sends_time_out_as_failures() {
    let project = Project::with_config(SLOW_CONFIG);
    let run = project
        .herald()
        .env("HERALD_SEND_TIMEOUT_MS", "50")
        .args(&["send", "-u", "alice", "-m", "hi", "-o", "json"])
        .exits_with(3);
    let result = run.json();

    let attempts = result["attempts"].as_array().unwrap();
    assert_eq!(attempts.len(), 2);
    for attempt in attempts {
        assert_eq!(attempt["success"], false);
        assert_eq!(attempt["error"], "timed out after 50ms");
    }
}

#[test]
fn timeout_from_config_file() {
    let project = Project::with_config(
        &SLOW_CONFIG.replace("latency_ms = 2000", "latency_ms = 2000\nsend_timeout_ms = 30"),
    );
    project
        .herald()
        .args(&["send", "-u", "alice", "-m", "hi"])
        .exits_with(3)
        .stdout_has("timed out after 30ms");
}
