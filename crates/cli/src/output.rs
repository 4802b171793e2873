// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use herald_core::{format_elapsed_ms, AttemptRecord, DispatchResult};
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line outcome, e.g. `delivered to alice via sms after 2 attempts`.
pub fn summary_line(result: &DispatchResult) -> String {
    let attempts = match result.attempts.len() {
        1 => "1 attempt".to_string(),
        n => format!("{n} attempts"),
    };
    if result.cancelled {
        return format!("cancelled for {} after {}", result.user, attempts);
    }
    match result.channel_used {
        Some(channel) if result.success => {
            format!("delivered to {} via {} after {}", result.user, channel, attempts)
        }
        _ if result.attempts.is_empty() => {
            format!("not delivered to {}: no channels configured", result.user)
        }
        _ => format!(
            "not delivered to {}: all channels failed after {}",
            result.user, attempts
        ),
    }
}

/// Table row for one attempt: channel, outcome, latency, error detail.
pub fn attempt_line(record: &AttemptRecord) -> String {
    let outcome = if record.success() { "ok" } else { "failed" };
    let line = format!(
        "{:<9} {:<7} {:>6}",
        record.channel().as_str(),
        outcome,
        format_elapsed_ms(record.elapsed_ms())
    );
    match record.error() {
        Some(error) => format!("{line}  {error}"),
        None => line,
    }
}

/// Full text rendering of a result: summary, request id, one row per attempt.
pub fn render_result(result: &DispatchResult) -> String {
    let mut out = format!(
        "{} (request {})\n",
        summary_line(result),
        result.request_id.short(8)
    );
    for record in &result.attempts {
        out.push_str("  ");
        out.push_str(&attempt_line(record));
        out.push('\n');
    }
    out
}
