// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced sender wrapper for consistent observability

use crate::sender::{ChannelSender, SendError};
use async_trait::async_trait;
use herald_core::{duration_ms, Channel, UserName};
use tracing::Instrument;

/// Wrapper that adds tracing to any ChannelSender
#[derive(Clone)]
pub struct TracedSender<S> {
    inner: S,
}

impl<S> TracedSender<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: ChannelSender> ChannelSender for TracedSender<S> {
    fn channel(&self) -> Channel {
        self.inner.channel()
    }

    async fn send(&self, recipient: &UserName, message: &str) -> Result<(), SendError> {
        let span = tracing::info_span!(
            "sender.send",
            channel = %self.inner.channel(),
            %recipient
        );
        async {
            tracing::debug!(message_len = message.len(), "sending");
            let start = std::time::Instant::now();
            let result = self.inner.send(recipient, message).await;
            let elapsed_ms = duration_ms(start.elapsed());
            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "delivered"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "delivery failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
