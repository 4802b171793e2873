// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console sender: prints notifications to a terminal stream.

use super::{ChannelSender, SendError};
use async_trait::async_trait;
use herald_core::{Channel, UserName};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Writes `[console] <recipient>: <message>` lines to a shared writer.
///
/// Lines from concurrent dispatches never interleave: each line is written
/// and flushed under the writer lock.
#[derive(Clone)]
pub struct ConsoleSender {
    writer: SharedWriter,
}

impl Default for ConsoleSender {
    fn default() -> Self {
        Self::stdout()
    }
}

impl ConsoleSender {
    pub fn stdout() -> Self {
        Self::with_writer(std::io::stdout())
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }
}

#[async_trait]
impl ChannelSender for ConsoleSender {
    fn channel(&self) -> Channel {
        Channel::Console
    }

    async fn send(&self, recipient: &UserName, message: &str) -> Result<(), SendError> {
        let mut writer = self.writer.lock();
        writeln!(writer, "[console] {}: {}", recipient, message)
            .and_then(|_| writer.flush())
            .map_err(|e| SendError::Transport(e.to_string()))
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
