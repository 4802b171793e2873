// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake sender for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ChannelSender, SendError};
use async_trait::async_trait;
use herald_core::{Channel, UserName};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// Recorded send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendCall {
    pub channel: Channel,
    pub recipient: UserName,
    pub message: String,
}

struct FakeSenderState {
    calls: Vec<SendCall>,
    script: VecDeque<Result<(), SendError>>,
    fallback: Result<(), SendError>,
    delay: Option<Duration>,
}

/// Deterministic sender with scripted outcomes.
///
/// Outcomes are consumed in order; once the script runs out, every send
/// returns the fallback outcome (delivered by default).
#[derive(Clone)]
pub struct FakeSender {
    channel: Channel,
    inner: Arc<Mutex<FakeSenderState>>,
}

impl FakeSender {
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            inner: Arc::new(Mutex::new(FakeSenderState {
                calls: Vec::new(),
                script: VecDeque::new(),
                fallback: Ok(()),
                delay: None,
            })),
        }
    }

    /// Sender that always delivers.
    pub fn succeeding(channel: Channel) -> Self {
        Self::new(channel)
    }

    /// Sender that always fails with a transport error.
    pub fn failing(channel: Channel) -> Self {
        let sender = Self::new(channel);
        sender.inner.lock().fallback =
            Err(SendError::Transport(format!("{channel} unreachable")));
        sender
    }

    /// Queue the outcome of the next unscripted send.
    pub fn then(self, outcome: Result<(), SendError>) -> Self {
        self.inner.lock().script.push_back(outcome);
        self
    }

    /// Delay every send by `delay` (use with paused tokio time).
    pub fn with_delay(self, delay: Duration) -> Self {
        self.inner.lock().delay = Some(delay);
        self
    }

    /// Get all recorded sends
    pub fn calls(&self) -> Vec<SendCall> {
        self.inner.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().calls.len()
    }
}

#[async_trait]
impl ChannelSender for FakeSender {
    fn channel(&self) -> Channel {
        self.channel
    }

    async fn send(&self, recipient: &UserName, message: &str) -> Result<(), SendError> {
        let (outcome, delay) = {
            let mut state = self.inner.lock();
            state.calls.push(SendCall {
                channel: self.channel,
                recipient: recipient.clone(),
                message: message.to_string(),
            });
            let outcome = match state.script.pop_front() {
                Some(outcome) => outcome,
                None => state.fallback.clone(),
            };
            (outcome, state.delay)
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        outcome
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
