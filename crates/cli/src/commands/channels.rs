// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `herald channels`: known channels and how each is served

use anyhow::Result;
use herald_core::Channel;
use serde::Serialize;

use crate::config::Config;
use crate::output::{print_json, OutputFormat};

#[derive(Debug, Serialize)]
pub struct ChannelEntry {
    pub channel: Channel,
    pub sender: String,
}

pub fn entries(config: &Config) -> Vec<ChannelEntry> {
    Channel::ALL
        .into_iter()
        .map(|channel| ChannelEntry {
            channel,
            sender: config.sender_kind(channel).to_string(),
        })
        .collect()
}

pub fn handle(config: &Config, format: OutputFormat) -> Result<()> {
    let entries = entries(config);
    match format {
        OutputFormat::Text => {
            for entry in &entries {
                println!("{:<9} {}", entry.channel.as_str(), entry.sender);
            }
        }
        OutputFormat::Json => print_json(&entries)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "channels_tests.rs"]
mod tests;
