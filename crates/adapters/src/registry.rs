// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Channel identifier to sender mapping

use crate::sender::{
    ChannelSender, ConsoleSender, DesktopSender, NoOpSender, SimulatedConfig, SimulatedSender,
};
use crate::traced::TracedSender;
use herald_core::{Channel, ChannelError};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Senders available to dispatch, keyed by channel.
///
/// Cheap to clone; senders are shared.
#[derive(Clone, Default)]
pub struct SenderRegistry {
    senders: BTreeMap<Channel, Arc<dyn ChannelSender>>,
}

impl SenderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Console and desktop get their real senders; every other channel gets a
    /// simulated transport. All senders are traced and the simulated ones
    /// share one generator.
    pub fn standard(config: &SimulatedConfig, console: ConsoleSender) -> Self {
        let mut registry = Self::new();
        registry.register(TracedSender::new(console));
        registry.register(TracedSender::new(DesktopSender::default()));
        registry.register_simulated(
            &[Channel::Email, Channel::Sms, Channel::Phone, Channel::Whatsapp],
            config,
        );
        registry
    }

    /// Register traced simulated senders for `channels`, sharing one generator.
    pub fn register_simulated(&mut self, channels: &[Channel], config: &SimulatedConfig) {
        let rates: Vec<_> = channels
            .iter()
            .map(|channel| (*channel, config.success_rate))
            .collect();
        self.register_simulated_rates(&rates, config);
    }

    /// Like [`Self::register_simulated`], with a success rate per channel.
    /// Replaces whatever was registered for those channels.
    pub fn register_simulated_rates(&mut self, rates: &[(Channel, f64)], config: &SimulatedConfig) {
        let rng = config.rng();
        for (channel, success_rate) in rates {
            let config = SimulatedConfig {
                success_rate: *success_rate,
                ..config.clone()
            };
            self.register(TracedSender::new(SimulatedSender::with_rng(
                *channel,
                &config,
                Arc::clone(&rng),
            )));
        }
    }

    /// Serve `channels` with traced no-op senders: attempts report delivered
    /// and the message goes nowhere.
    pub fn register_muted(&mut self, channels: &[Channel]) {
        for channel in channels {
            self.register(TracedSender::new(NoOpSender::new(*channel)));
        }
    }

    /// Register a sender under its own channel, replacing any previous one.
    pub fn register<S: ChannelSender>(&mut self, sender: S) -> &mut Self {
        self.senders.insert(sender.channel(), Arc::new(sender));
        self
    }

    pub fn get(&self, channel: Channel) -> Result<Arc<dyn ChannelSender>, ChannelError> {
        self.senders
            .get(&channel)
            .cloned()
            .ok_or(ChannelError::NotRegistered(channel))
    }

    pub fn contains(&self, channel: Channel) -> bool {
        self.senders.contains_key(&channel)
    }

    /// Registered channels in identifier order.
    pub fn channels(&self) -> Vec<Channel> {
        self.senders.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}

impl std::fmt::Debug for SenderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SenderRegistry")
            .field("channels", &self.channels())
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
