// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `herald users`: configured recipients and their chain order

use anyhow::Result;
use herald_core::{Channel, UserProfile};
use serde::Serialize;

use crate::config::Config;
use crate::output::{print_json, OutputFormat};

#[derive(Debug, Serialize)]
pub struct UserEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<Vec<Channel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UserEntry {
    pub fn from_profile(profile: &UserProfile) -> Self {
        match profile.to_user() {
            Ok(user) => Self {
                name: profile.name.clone(),
                chain: Some(user.channel_order()),
                error: None,
            },
            Err(e) => Self {
                name: profile.name.clone(),
                chain: None,
                error: Some(e.to_string()),
            },
        }
    }

    fn text(&self, width: usize) -> String {
        let detail = match (&self.chain, &self.error) {
            (_, Some(error)) => format!("invalid: {error}"),
            (Some(chain), None) if chain.is_empty() => "(no channels)".to_string(),
            (Some(chain), None) => chain
                .iter()
                .map(Channel::as_str)
                .collect::<Vec<_>>()
                .join(" -> "),
            (None, None) => String::new(),
        };
        format!("{:<width$}  {}", self.name, detail)
    }
}

pub fn handle(config: &Config, format: OutputFormat) -> Result<()> {
    let entries: Vec<UserEntry> = config.users.iter().map(UserEntry::from_profile).collect();

    match format {
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("No users configured");
                return Ok(());
            }
            let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
            for entry in &entries {
                println!("{}", entry.text(width));
            }
        }
        OutputFormat::Json => print_json(&entries)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
