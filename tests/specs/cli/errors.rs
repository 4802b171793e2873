//! CLI error handling specs
//!
//! Verify error messages and exit codes for bad input.

use crate::prelude::*;

#[test]
fn unknown_subcommand_is_usage_error() {
    cli().args(&["shout"]).exits_with(2);
}

#[test]
fn send_without_message_is_usage_error() {
    cli()
        .args(&["send", "--user", "alice"])
        .exits_with(2)
        .stderr_has("--message");
}

#[test]
fn unknown_user_exits_4() {
    let project = Project::with_config(FALLBACK_CONFIG);
    project
        .herald()
        .args(&["send", "--user", "zed", "--message", "hi"])
        .exits_with(4)
        .stderr_eq("Error: user not found: zed\n")
        .stdout_eq("");
}

#[test]
fn unknown_channel_exits_5_before_any_attempt() {
    let project = Project::with_config(FALLBACK_CONFIG);
    project
        .herald()
        .args(&["send", "--user", "dave", "--message", "hi"])
        .exits_with(5)
        .stderr_has("invalid channel configuration for user dave")
        .stderr_has("unknown channel: fax")
        .stdout_eq("");
}

#[test]
fn preferred_outside_available_exits_5() {
    let project = Project::with_config(
        r#"
[[users]]
name = "frank"
preferred = "sms"
available = ["email"]
"#,
    );
    project
        .herald()
        .args(&["send", "--user", "frank", "--message", "hi"])
        .exits_with(5)
        .stderr_has("preferred channel sms is not among the available channels");
}

#[test]
fn malformed_config_exits_1() {
    let project = Project::with_config("[settings\nseed = 1");
    project
        .herald()
        .args(&["users"])
        .exits_with(1)
        .stderr_has("failed to parse config herald.toml");
}

#[test]
fn out_of_range_success_rate_is_rejected() {
    let project = Project::with_config("[channels.sms]\nsuccess_rate = 3.0");
    project
        .herald()
        .args(&["channels"])
        .exits_with(1)
        .stderr_has("success_rate for sms must be between 0 and 1, got 3");
}

#[test]
fn missing_explicit_config_exits_1() {
    let project = Project::empty();
    project
        .herald()
        .args(&["users", "--config", "absent.toml"])
        .exits_with(1)
        .stderr_has("failed to read config absent.toml");
}
