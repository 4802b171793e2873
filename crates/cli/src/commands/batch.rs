// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `herald batch`: dispatch JSON-lines requests concurrently

use anyhow::{Context, Result};
use clap::Args;
use herald_core::{AttemptRecord, DispatchResult};
use herald_engine::{DispatchOptions, NotifyInput};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;

use super::AppDispatcher;
use crate::exit_error::{dispatch_error_code, ExitError, CANCELLED};
use crate::output::{attempt_line, summary_line, OutputFormat};

#[derive(Args)]
pub struct BatchArgs {
    /// JSON-lines file of {"user_name", "message", "priority"}; `-` reads stdin
    #[arg(value_name = "FILE", default_value = "-")]
    pub input: PathBuf,

    /// Maximum dispatches in flight
    #[arg(long, short = 'j', default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: u16,

    /// Print every attempt-log record after the results
    #[arg(long)]
    pub show_log: bool,
}

/// Outcome of one input line.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LineOutcome {
    Dispatched {
        line: usize,
        result: DispatchResult,
    },
    Rejected {
        line: usize,
        error: String,
        code: i32,
    },
}

impl LineOutcome {
    fn text(&self) -> String {
        match self {
            LineOutcome::Dispatched { line, result } => format!("{line}: {}", summary_line(result)),
            LineOutcome::Rejected { line, error, .. } => format!("{line}: error: {error}"),
        }
    }

    fn cancelled(&self) -> bool {
        matches!(self, LineOutcome::Dispatched { result, .. } if result.cancelled)
    }
}

#[derive(Debug, Serialize)]
pub struct LogSummary {
    pub records: usize,
    pub delivered: usize,
    pub failed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts: Option<Vec<AttemptRecord>>,
}

impl LogSummary {
    pub fn new(records: Vec<AttemptRecord>, show_all: bool) -> Self {
        let delivered = records.iter().filter(|r| r.success()).count();
        Self {
            records: records.len(),
            delivered,
            failed: records.len() - delivered,
            attempts: show_all.then_some(records),
        }
    }
}

/// Parse input into `(line number, request)` pairs, skipping blank lines.
/// Malformed lines become rejected outcomes so the rest still run.
pub fn parse_lines(text: &str) -> Vec<Result<(usize, NotifyInput), LineOutcome>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let line_no = i + 1;
            serde_json::from_str::<NotifyInput>(line)
                .map(|input| (line_no, input))
                .map_err(|e| LineOutcome::Rejected {
                    line: line_no,
                    error: format!("invalid request: {e}"),
                    code: crate::exit_error::GENERIC,
                })
        })
        .collect()
}

fn read_input(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read requests from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read requests from {}", path.display()))
    }
}

/// Run every parsed line with at most `jobs` in flight; outcomes come back
/// in input order.
pub async fn run_lines(
    lines: Vec<Result<(usize, NotifyInput), LineOutcome>>,
    dispatcher: Arc<AppDispatcher>,
    options: DispatchOptions,
    jobs: usize,
) -> Result<Vec<LineOutcome>> {
    let permits = Arc::new(Semaphore::new(jobs));
    let mut pending = Vec::with_capacity(lines.len());

    for line in lines {
        match line {
            Err(rejected) => pending.push(Err(rejected)),
            Ok((line, input)) => {
                let dispatcher = Arc::clone(&dispatcher);
                let permits = Arc::clone(&permits);
                let options = options.clone();
                pending.push(Ok(tokio::spawn(async move {
                    let _permit = permits.acquire_owned().await;
                    match dispatcher.notify_with(input, &options).await {
                        Ok(result) => LineOutcome::Dispatched { line, result },
                        Err(e) => LineOutcome::Rejected {
                            line,
                            error: e.to_string(),
                            code: dispatch_error_code(&e),
                        },
                    }
                })));
            }
        }
    }

    let mut outcomes = Vec::with_capacity(pending.len());
    for entry in pending {
        outcomes.push(match entry {
            Err(rejected) => rejected,
            Ok(handle) => handle.await.context("dispatch task failed")?,
        });
    }
    Ok(outcomes)
}

pub async fn handle(args: BatchArgs, dispatcher: AppDispatcher, format: OutputFormat) -> Result<()> {
    let text = read_input(&args.input)?;
    let lines = parse_lines(&text);
    tracing::info!(requests = lines.len(), jobs = args.jobs, "batch started");

    let dispatcher = Arc::new(dispatcher);
    let options = DispatchOptions::default().with_cancel(super::cancel_on_interrupt());
    let outcomes = run_lines(lines, Arc::clone(&dispatcher), options, usize::from(args.jobs)).await?;
    let summary = LogSummary::new(dispatcher.log().all(), args.show_log);

    match format {
        OutputFormat::Text => {
            for outcome in &outcomes {
                println!("{}", outcome.text());
            }
            println!(
                "attempt log: {} records, {} delivered, {} failed",
                summary.records, summary.delivered, summary.failed
            );
            for record in summary.attempts.iter().flatten() {
                println!("  {}  {}  {}", record.request_id().short(8), record.user(), attempt_line(record));
            }
        }
        OutputFormat::Json => {
            for outcome in &outcomes {
                println!("{}", serde_json::to_string(outcome)?);
            }
            println!("{}", serde_json::to_string(&serde_json::json!({ "log": summary }))?);
        }
    }

    if outcomes.iter().any(LineOutcome::cancelled) {
        return Err(ExitError::silent(CANCELLED).into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
