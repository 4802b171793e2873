// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! herald.toml loading and validation
//!
//! Resolution order: `--config <path>`, then `HERALD_CONFIG`, then
//! `./herald.toml`. A missing default file is an empty config; a missing
//! explicit file is an error.

use herald_adapters::{ConsoleSender, SenderRegistry, SimulatedConfig};
use herald_core::{duration_ms, Channel, UserProfile};
use herald_engine::InMemoryUserDirectory;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "herald.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("success_rate for {scope} must be between 0 and 1, got {value}")]
    SuccessRate { scope: String, value: f64 },

    #[error("unknown channel in [channels]: {0}")]
    UnknownChannel(String),

    #[error("duplicate user: {0}")]
    DuplicateUser(String),

    #[error("user with empty name")]
    EmptyUserName,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub channels: BTreeMap<String, ChannelSettings>,
    /// Profiles are kept raw: bad channel names only fail the affected
    /// user, at dispatch time.
    #[serde(default)]
    pub users: Vec<UserProfile>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub send_timeout_ms: Option<u64>,
    pub success_rate: Option<f64>,
    pub seed: Option<u64>,
    pub latency_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChannelSettings {
    /// Replaces the channel's sender with a simulated one at this rate.
    pub success_rate: Option<f64>,
    /// Attempts on a muted channel report delivered and send nothing.
    /// Takes precedence over `success_rate`.
    #[serde(default)]
    pub muted: bool,
}

/// How a channel is served, for listing.
#[derive(Debug, Clone, PartialEq)]
pub enum SenderKind {
    Console,
    Desktop,
    Muted,
    Simulated { success_rate: f64 },
}

impl std::fmt::Display for SenderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SenderKind::Console => f.write_str("console output"),
            SenderKind::Desktop => f.write_str("desktop notification"),
            SenderKind::Muted => f.write_str("muted"),
            SenderKind::Simulated { success_rate } => {
                write!(f, "simulated (success rate {success_rate})")
            }
        }
    }
}

impl Config {
    /// Resolve, read, validate, and apply environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit.map(Path::to_path_buf).or_else(crate::env::config_path) {
            Some(path) => Self::read(&path)?,
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::read(&path)?
                } else {
                    tracing::debug!("no config file, using defaults");
                    Self::default()
                }
            }
        };
        config.apply_env_overrides();
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(rate) = self.settings.success_rate {
            check_rate("settings", rate)?;
        }
        for (name, channel) in &self.channels {
            Channel::parse(name).map_err(|_| ConfigError::UnknownChannel(name.clone()))?;
            if let Some(rate) = channel.success_rate {
                check_rate(name, rate)?;
            }
        }
        let mut seen = HashSet::new();
        for user in &self.users {
            if user.name.trim().is_empty() {
                return Err(ConfigError::EmptyUserName);
            }
            if !seen.insert(user.name.as_str()) {
                return Err(ConfigError::DuplicateUser(user.name.clone()));
            }
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Some(timeout) = crate::env::send_timeout() {
            self.settings.send_timeout_ms = Some(duration_ms(timeout));
        }
        if let Some(seed) = crate::env::seed() {
            self.settings.seed = Some(seed);
        }
    }

    pub fn send_timeout(&self) -> Option<Duration> {
        self.settings.send_timeout_ms.map(Duration::from_millis)
    }

    pub fn simulated(&self) -> SimulatedConfig {
        let defaults = SimulatedConfig::default();
        SimulatedConfig {
            success_rate: self.settings.success_rate.unwrap_or(defaults.success_rate),
            seed: self.settings.seed,
            latency: self.settings.latency_ms.map(Duration::from_millis),
        }
    }

    fn channel_settings(&self) -> impl Iterator<Item = (Channel, &ChannelSettings)> {
        self.channels
            .iter()
            .filter_map(|(name, settings)| Channel::parse(name).ok().map(|c| (c, settings)))
    }

    /// Per-channel rate overrides from `[channels]`, in channel order.
    /// Muted channels are left out.
    pub fn rate_overrides(&self) -> Vec<(Channel, f64)> {
        let mut overrides: Vec<_> = self
            .channel_settings()
            .filter(|(_, settings)| !settings.muted)
            .filter_map(|(channel, settings)| settings.success_rate.map(|rate| (channel, rate)))
            .collect();
        overrides.sort_by_key(|(channel, _)| *channel);
        overrides
    }

    /// Channels marked `muted = true`, in channel order.
    pub fn muted_channels(&self) -> Vec<Channel> {
        let mut muted: Vec<_> = self
            .channel_settings()
            .filter(|(_, settings)| settings.muted)
            .map(|(channel, _)| channel)
            .collect();
        muted.sort();
        muted.dedup();
        muted
    }

    pub fn sender_kind(&self, channel: Channel) -> SenderKind {
        if self.muted_channels().contains(&channel) {
            return SenderKind::Muted;
        }
        if let Some((_, success_rate)) =
            self.rate_overrides().into_iter().find(|(c, _)| *c == channel)
        {
            return SenderKind::Simulated { success_rate };
        }
        match channel {
            Channel::Console => SenderKind::Console,
            Channel::Desktop => SenderKind::Desktop,
            _ => SenderKind::Simulated {
                success_rate: self.simulated().success_rate,
            },
        }
    }

    pub fn registry(&self, console: ConsoleSender) -> SenderRegistry {
        let simulated = self.simulated();
        let mut registry = SenderRegistry::standard(&simulated, console);
        let overrides = self.rate_overrides();
        if !overrides.is_empty() {
            registry.register_simulated_rates(&overrides, &simulated);
        }
        registry.register_muted(&self.muted_channels());
        registry
    }

    pub fn directory(&self) -> InMemoryUserDirectory {
        self.users.iter().cloned().collect()
    }
}

fn check_rate(scope: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::SuccessRate {
            scope: scope.to_string(),
            value,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
