// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Channel sender adapters

mod console;
mod desktop;
mod noop;
mod simulated;

pub use console::ConsoleSender;
pub use desktop::DesktopSender;
pub use noop::NoOpSender;
pub use simulated::{SimulatedConfig, SimulatedSender};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSender, SendCall};

use async_trait::async_trait;
use herald_core::{Channel, UserName};
use thiserror::Error;

/// Expected delivery failures.
///
/// These describe a channel that could not deliver right now. They are data,
/// not faults: the dispatch chain records them and moves on to the next
/// channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("rejected: {0}")]
    Rejected(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unavailable: {0}")]
    Unavailable(String),
}

/// Capability to attempt delivery of a message over one channel
#[async_trait]
pub trait ChannelSender: Send + Sync + 'static {
    /// Channel this sender delivers over
    fn channel(&self) -> Channel;

    /// Attempt delivery once. `Ok(())` means delivered.
    async fn send(&self, recipient: &UserName, message: &str) -> Result<(), SendError>;
}
