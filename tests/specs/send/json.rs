//! JSON output specs for `send`

use crate::prelude::*;

#[test]
fn json_result_lists_attempts_in_order() {
    let project = Project::with_config(FALLBACK_CONFIG);
    let run = project
        .herald()
        .args(&["send", "-u", "alice", "-m", "hi", "-o", "json"])
        .passes();
    let result = run.json();

    assert_eq!(result["user"], "alice");
    assert_eq!(result["success"], true);
    assert_eq!(result["channel_used"], "sms");
    assert!(result.get("cancelled").is_none());

    let attempts = result["attempts"].as_array().unwrap();
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[0]["channel"], "email");
    assert_eq!(attempts[0]["success"], false);
    assert_eq!(attempts[0]["error"], "transport error: simulated email transport failure");
    assert_eq!(attempts[1]["channel"], "sms");
    assert_eq!(attempts[1]["success"], true);
    assert!(attempts[1].get("error").is_none());
    for attempt in attempts {
        assert_eq!(attempt["request_id"], result["request_id"]);
        assert!(attempt["timestamp"].as_str().unwrap().contains('T'));
    }
}

#[test]
fn json_failure_has_null_channel() {
    let project = Project::with_config(FALLBACK_CONFIG);
    let run = project
        .herald()
        .args(&["send", "-u", "carol", "-m", "hi", "-o", "json"])
        .exits_with(3);
    let result = run.json();

    assert_eq!(result["success"], false);
    assert!(result["channel_used"].is_null());
    assert_eq!(result["attempts"], serde_json::json!([]));
}

#[test]
fn console_output_moves_to_stderr_under_json() {
    let project = Project::with_config(FALLBACK_CONFIG);
    let run = project
        .herald()
        .args(&["send", "-u", "bob", "-m", "hi", "-o", "json"])
        .passes()
        .stderr_has("[console] bob: hi");
    assert_eq!(run.json()["channel_used"], "console");
}
