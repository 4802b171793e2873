//! Channel fallback specs
//!
//! Verify channel order, fallback on failure, and exit codes for `send`.

use crate::prelude::*;

#[test]
fn failed_preferred_channel_falls_back() {
    let project = Project::with_config(FALLBACK_CONFIG);
    project
        .herald()
        .args(&["send", "--user", "alice", "--message", "disk full"])
        .passes()
        .stdout_has("delivered to alice via sms after 2 attempts")
        .stdout_has("email     failed")
        .stdout_has("simulated email transport failure")
        .stdout_has("sms       ok");
}

#[test]
fn preferred_channel_is_tried_first() {
    let project = Project::with_config(FALLBACK_CONFIG);
    project
        .herald()
        .args(&["send", "--user", "anna", "--message", "hi"])
        .passes()
        .stdout_has("delivered to anna via sms after 1 attempt")
        .stdout_lacks("email");
}

#[test]
fn console_delivery_prints_prioritized_message() {
    let project = Project::with_config(FALLBACK_CONFIG);
    project
        .herald()
        .args(&[
            "send",
            "--user",
            "bob",
            "--message",
            "disk full",
            "--priority",
            "high",
        ])
        .passes()
        .stdout_has("[console] bob: [HIGH] disk full\n")
        .stdout_has("delivered to bob via console after 1 attempt");
}

#[test]
fn sole_failing_channel_exits_3() {
    let project = Project::with_config(
        r#"
[channels.console]
success_rate = 0.0

[[users]]
name = "bob"
preferred = "console"
available = ["console"]
"#,
    );
    project
        .herald()
        .args(&["send", "--user", "bob", "--message", "hi"])
        .exits_with(3)
        .stdout_has("not delivered to bob: all channels failed after 1 attempt")
        .stdout_has("console   failed");
}

#[test]
fn every_channel_failing_exits_3() {
    let project = Project::with_config(FALLBACK_CONFIG);
    project
        .herald()
        .args(&["send", "--user", "erin", "--message", "hi"])
        .exits_with(3)
        .stdout_has("not delivered to erin: all channels failed after 2 attempts")
        .stderr_has("all channels failed");
}

#[test]
fn user_without_channels_exits_3() {
    let project = Project::with_config(FALLBACK_CONFIG);
    project
        .herald()
        .args(&["send", "--user", "carol", "--message", "hi"])
        .exits_with(3)
        .stdout_has("not delivered to carol: no channels configured");
}

#[test]
fn muted_channel_reports_delivery_without_output() {
    let project = Project::with_config(
        r#"
[channels.console]
muted = true

[[users]]
name = "bob"
preferred = "console"
available = ["console"]
"#,
    );
    project
        .herald()
        .args(&["send", "--user", "bob", "--message", "disk full"])
        .passes()
        .stdout_has("delivered to bob via console after 1 attempt")
        .stdout_lacks("[console]");
}
