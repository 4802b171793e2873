// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered channel fallback.
//!
//! A chain is the resolved list of senders for one user. Dispatch walks it
//! front to back, one channel at a time, and stops at the first delivery.
//! Every attempt is appended to the attempt log before the next one starts.

use crate::attempt_log::AttemptLog;
use herald_adapters::{ChannelSender, SenderRegistry};
use herald_core::{
    duration_ms, AttemptRecord, Channel, ChannelError, Clock, DispatchRequest, DispatchResult,
    User, UserName,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// Per-call dispatch controls
#[derive(Clone, Debug, Default)]
pub struct DispatchOptions {
    /// Upper bound for each send. A send that runs over counts as a failure
    /// and the chain moves on.
    pub send_timeout: Option<Duration>,
    /// Aborts the remaining attempts when triggered.
    pub cancel: CancellationToken,
}

impl DispatchOptions {
    pub fn with_send_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.send_timeout = timeout;
        self
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}

/// Senders for one user, in the order they will be tried.
#[derive(Clone)]
pub struct ChannelChain {
    links: Vec<Arc<dyn ChannelSender>>,
}

impl ChannelChain {
    /// Resolve the user's channel order against the registry.
    ///
    /// Fails if any channel has no sender, so a bad configuration is caught
    /// before anything is sent or logged.
    pub fn for_user(user: &User, registry: &SenderRegistry) -> Result<Self, ChannelError> {
        let links = user
            .channel_order()
            .into_iter()
            .map(|channel| registry.get(channel))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { links })
    }

    /// Validate raw identifiers and resolve them in one step.
    pub fn from_identifiers<S: AsRef<str>>(
        user: impl Into<UserName>,
        preferred: Option<&str>,
        available: &[S],
        registry: &SenderRegistry,
    ) -> Result<Self, ChannelError> {
        let user = User::from_identifiers(user, preferred, available)?;
        Self::for_user(&user, registry)
    }

    pub fn channels(&self) -> Vec<Channel> {
        self.links.iter().map(|s| s.channel()).collect()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Try each channel in order until one delivers.
    ///
    /// Returns a failed result with the full trail when every channel fails,
    /// an empty failed result for an empty chain, and a partial result
    /// marked `cancelled` if the token fires. A send interrupted by
    /// cancellation has no outcome and is not recorded.
    pub async fn dispatch<C: Clock>(
        &self,
        request: &DispatchRequest,
        log: &AttemptLog,
        clock: &C,
        options: &DispatchOptions,
    ) -> DispatchResult {
        let message = request.formatted_message();
        let mut attempts = Vec::with_capacity(self.links.len());

        if self.links.is_empty() {
            tracing::info!("no channels configured");
        }

        for (position, sender) in self.links.iter().enumerate() {
            if options.cancel.is_cancelled() {
                return cancelled(request, attempts, position);
            }

            let channel = sender.channel();
            let timestamp = clock.now();
            let start = Instant::now();

            let outcome = tokio::select! {
                biased;
                _ = options.cancel.cancelled() => {
                    return cancelled(request, attempts, position);
                }
                outcome = send_bounded(sender.as_ref(), &request.user, &message, options.send_timeout) => outcome,
            };
            let elapsed_ms = duration_ms(start.elapsed());

            let record = match outcome {
                Ok(()) => AttemptRecord::delivered(
                    request.id.clone(),
                    request.user.clone(),
                    channel,
                    timestamp,
                    elapsed_ms,
                ),
                Err(detail) => {
                    tracing::info!(%channel, position, error = %detail, "channel failed, falling back");
                    AttemptRecord::failed(
                        request.id.clone(),
                        request.user.clone(),
                        channel,
                        timestamp,
                        elapsed_ms,
                        detail,
                    )
                }
            };
            let delivered = record.success();
            log.record(record.clone());
            attempts.push(record);

            if delivered {
                tracing::info!(%channel, attempts = attempts.len(), "delivered");
                return DispatchResult::delivered(
                    request.id.clone(),
                    request.user.clone(),
                    channel,
                    attempts,
                );
            }
        }

        if !attempts.is_empty() {
            tracing::warn!(attempts = attempts.len(), "all channels failed");
        }
        DispatchResult::failed(request.id.clone(), request.user.clone(), attempts)
    }
}

impl std::fmt::Debug for ChannelChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelChain")
            .field("channels", &self.channels())
            .finish()
    }
}

/// Run one send, mapping both delivery errors and timeouts to a detail string.
async fn send_bounded(
    sender: &dyn ChannelSender,
    recipient: &UserName,
    message: &str,
    timeout: Option<Duration>,
) -> Result<(), String> {
    let send = sender.send(recipient, message);
    let result = match timeout {
        Some(limit) => match tokio::time::timeout(limit, send).await {
            Ok(result) => result,
            Err(_) => return Err(format!("timed out after {}ms", limit.as_millis())),
        },
        None => send.await,
    };
    result.map_err(|e| e.to_string())
}

fn cancelled(
    request: &DispatchRequest,
    attempts: Vec<AttemptRecord>,
    position: usize,
) -> DispatchResult {
    tracing::info!(position, attempts = attempts.len(), "dispatch cancelled");
    DispatchResult::cancelled(request.id.clone(), request.user.clone(), attempts)
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod tests;
