// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated transport for channels without a real backend.
//!
//! Each send is a Bernoulli draw with a configurable success rate. A seed
//! makes a run reproducible; senders built from the same config share one
//! generator so the draw sequence does not depend on which channel goes
//! first.

use super::{ChannelSender, SendError};
use async_trait::async_trait;
use herald_core::{Channel, UserName};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;

/// Default probability that a simulated send succeeds.
pub const DEFAULT_SUCCESS_RATE: f64 = 0.5;

/// Parameters for simulated senders
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedConfig {
    /// Probability in `[0, 1]` that a send succeeds. Out-of-range values are
    /// clamped; NaN counts as zero.
    pub success_rate: f64,
    /// Seed for reproducible outcomes; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Artificial delay before each outcome.
    pub latency: Option<Duration>,
}

impl Default for SimulatedConfig {
    fn default() -> Self {
        Self {
            success_rate: DEFAULT_SUCCESS_RATE,
            seed: None,
            latency: None,
        }
    }
}

impl SimulatedConfig {
    /// Build the shared generator for this config.
    pub fn rng(&self) -> Arc<Mutex<StdRng>> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Arc::new(Mutex::new(rng))
    }
}

#[derive(Clone)]
pub struct SimulatedSender {
    channel: Channel,
    success_rate: f64,
    latency: Option<Duration>,
    rng: Arc<Mutex<StdRng>>,
}

impl SimulatedSender {
    pub fn new(channel: Channel, config: &SimulatedConfig) -> Self {
        Self::with_rng(channel, config, config.rng())
    }

    /// Build a sender drawing from a generator shared with other senders.
    pub fn with_rng(channel: Channel, config: &SimulatedConfig, rng: Arc<Mutex<StdRng>>) -> Self {
        Self {
            channel,
            success_rate: clamp_rate(config.success_rate),
            latency: config.latency,
            rng,
        }
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }

    fn draw(&self) -> bool {
        self.rng.lock().random_bool(self.success_rate)
    }
}

fn clamp_rate(rate: f64) -> f64 {
    if rate.is_nan() {
        0.0
    } else {
        rate.clamp(0.0, 1.0)
    }
}

#[async_trait]
impl ChannelSender for SimulatedSender {
    fn channel(&self) -> Channel {
        self.channel
    }

    async fn send(&self, recipient: &UserName, _message: &str) -> Result<(), SendError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.draw() {
            tracing::debug!(channel = %self.channel, %recipient, "simulated delivery");
            Ok(())
        } else {
            Err(SendError::Transport(format!(
                "simulated {} transport failure",
                self.channel
            )))
        }
    }
}

#[cfg(test)]
#[path = "simulated_tests.rs"]
mod tests;
