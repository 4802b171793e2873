//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn herald_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn herald_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("send")
        .stdout_has("batch")
        .stdout_has("users")
        .stdout_has("channels");
}

#[test]
fn herald_send_help_shows_flags() {
    cli()
        .args(&["send", "--help"])
        .passes()
        .stdout_has("--user")
        .stdout_has("--message")
        .stdout_has("--priority");
}

#[test]
fn herald_batch_help_shows_flags() {
    cli()
        .args(&["batch", "--help"])
        .passes()
        .stdout_has("--jobs")
        .stdout_has("--show-log");
}

#[test]
fn herald_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
