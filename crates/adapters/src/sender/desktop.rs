// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Desktop notification sender using notify-rust.
//!
//! `Notification::show()` is synchronous, so it runs on tokio's blocking
//! pool. Unlike a fire-and-forget toast, the chain needs the outcome, so the
//! blocking task is awaited.
//!
//! On macOS, notify-rust looks up a bundle identifier through AppleScript
//! before the first notification. Without Automation permission that lookup
//! never returns, so the identifier is set up front.

use super::{ChannelSender, SendError};
use async_trait::async_trait;
use herald_core::{Channel, UserName};

#[derive(Clone, Debug)]
pub struct DesktopSender {
    app_name: String,
}

impl Default for DesktopSender {
    fn default() -> Self {
        Self::new("herald")
    }
}

impl DesktopSender {
    pub fn new(app_name: impl Into<String>) -> Self {
        #[cfg(target_os = "macos")]
        {
            let _ = mac_notification_sys::set_application("com.apple.Terminal");
        }
        Self {
            app_name: app_name.into(),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }
}

#[async_trait]
impl ChannelSender for DesktopSender {
    fn channel(&self) -> Channel {
        Channel::Desktop
    }

    async fn send(&self, recipient: &UserName, message: &str) -> Result<(), SendError> {
        let app_name = self.app_name.clone();
        let summary = format!("Notification for {recipient}");
        let body = message.to_string();

        let shown = tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&summary)
                .body(&body)
                .show()
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| SendError::Unavailable(format!("notification task failed: {e}")))?;

        shown.map_err(SendError::Transport)
    }
}

#[cfg(test)]
#[path = "desktop_tests.rs"]
mod tests;
