// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op sender.

use super::{ChannelSender, SendError};
use async_trait::async_trait;
use herald_core::{Channel, UserName};

/// Sender that reports every message as delivered and discards it.
///
/// Used for channels that are configured but intentionally muted.
#[derive(Clone, Copy, Debug)]
pub struct NoOpSender {
    channel: Channel,
}

impl NoOpSender {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl ChannelSender for NoOpSender {
    fn channel(&self) -> Channel {
        self.channel
    }

    async fn send(&self, _recipient: &UserName, _message: &str) -> Result<(), SendError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
