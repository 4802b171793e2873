// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod batch;
pub mod channels;
pub mod send;
pub mod users;

use crate::config::Config;
use crate::output::OutputFormat;
use herald_adapters::ConsoleSender;
use herald_engine::{AttemptLog, Dispatcher, InMemoryUserDirectory};
use tokio_util::sync::CancellationToken;

pub type AppDispatcher = Dispatcher<InMemoryUserDirectory>;

/// Build the dispatcher for one CLI invocation.
///
/// Console notifications go to stderr under JSON output so stdout stays
/// machine-readable.
pub fn dispatcher(config: &Config, format: OutputFormat, log: AttemptLog) -> AppDispatcher {
    let console = match format {
        OutputFormat::Text => ConsoleSender::stdout(),
        OutputFormat::Json => ConsoleSender::with_writer(std::io::stderr()),
    };
    Dispatcher::new(config.registry(console), log, config.directory())
        .with_send_timeout(config.send_timeout())
}

/// Token cancelled on Ctrl-C.
pub fn cancel_on_interrupt() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted, cancelling dispatch");
            trigger.cancel();
        }
    });
    token
}
