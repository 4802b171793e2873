// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! herald - multichannel notification dispatch CLI

mod commands;
mod config;
mod env;
mod exit_error;
mod logging;
mod output;

use output::OutputFormat;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{batch, channels, send, users};
use herald_engine::AttemptLog;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "herald",
    version,
    about = "Herald - deliver notifications over the first channel that works"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Config file (default: $HERALD_CONFIG, then ./herald.toml)
    #[arg(short = 'c', long = "config", global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one notification, falling back across the user's channels
    Send(send::SendArgs),
    /// Send JSON-lines requests concurrently
    Batch(batch::BatchArgs),
    /// List configured users and their channel order
    Users,
    /// List channels and the sender serving each
    Channels,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(exit_error::GENERIC, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped. Otherwise the full chain is rendered.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = config::Config::load(cli.config.as_deref())?;
    let _log_guard = logging::setup_logging(config.settings.log_file.as_deref())?;
    tracing::debug!(users = config.users.len(), "config loaded");

    match command {
        Commands::Send(args) => {
            let dispatcher =
                commands::dispatcher(&config, format, AttemptLog::global().clone());
            send::handle(args, &dispatcher, format).await
        }
        Commands::Batch(args) => {
            let dispatcher =
                commands::dispatcher(&config, format, AttemptLog::global().clone());
            batch::handle(args, dispatcher, format).await
        }
        Commands::Users => users::handle(&config, format),
        Commands::Channels => channels::handle(&config, format),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
