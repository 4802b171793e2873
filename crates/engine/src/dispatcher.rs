// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request-level entry point: look up the user, build a chain, dispatch.

use crate::attempt_log::AttemptLog;
use crate::chain::{ChannelChain, DispatchOptions};
use crate::directory::UserDirectory;
use crate::error::DispatchError;
use herald_adapters::SenderRegistry;
use herald_core::{
    Clock, DispatchRequest, DispatchResult, IdGen, Priority, SystemClock, UuidIdGen,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::Instrument;

/// One notify call as a caller submits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyInput {
    pub user_name: String,
    pub message: String,
    #[serde(default)]
    pub priority: Priority,
}

impl NotifyInput {
    pub fn new(
        user_name: impl Into<String>,
        message: impl Into<String>,
        priority: impl Into<Priority>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            message: message.into(),
            priority: priority.into(),
        }
    }
}

/// Dispatches notifications for users held in a directory.
///
/// Safe to share across tasks: every call builds its own chain, and the
/// only shared mutable state is the attempt log.
pub struct Dispatcher<D: UserDirectory, C: Clock = SystemClock, G: IdGen = UuidIdGen> {
    registry: SenderRegistry,
    log: AttemptLog,
    directory: D,
    clock: C,
    ids: G,
    send_timeout: Option<Duration>,
}

impl<D: UserDirectory> Dispatcher<D> {
    pub fn new(registry: SenderRegistry, log: AttemptLog, directory: D) -> Self {
        Self {
            registry,
            log,
            directory,
            clock: SystemClock,
            ids: UuidIdGen,
            send_timeout: None,
        }
    }
}

impl<D: UserDirectory, C: Clock, G: IdGen> Dispatcher<D, C, G> {
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Dispatcher<D, C2, G> {
        Dispatcher {
            registry: self.registry,
            log: self.log,
            directory: self.directory,
            clock,
            ids: self.ids,
            send_timeout: self.send_timeout,
        }
    }

    pub fn with_id_gen<G2: IdGen>(self, ids: G2) -> Dispatcher<D, C, G2> {
        Dispatcher {
            registry: self.registry,
            log: self.log,
            directory: self.directory,
            clock: self.clock,
            ids,
            send_timeout: self.send_timeout,
        }
    }

    /// Default per-send timeout, used when call options don't set one.
    pub fn with_send_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.send_timeout = timeout;
        self
    }

    pub fn log(&self) -> &AttemptLog {
        &self.log
    }

    pub fn registry(&self) -> &SenderRegistry {
        &self.registry
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub async fn notify(&self, input: NotifyInput) -> Result<DispatchResult, DispatchError> {
        self.notify_with(input, &DispatchOptions::default()).await
    }

    /// Dispatch one notification.
    ///
    /// Unknown users and bad channel configuration are errors, raised before
    /// any attempt. Delivery failure is an `Ok` result with `success == false`.
    pub async fn notify_with(
        &self,
        input: NotifyInput,
        options: &DispatchOptions,
    ) -> Result<DispatchResult, DispatchError> {
        let profile = self
            .directory
            .find_by_name(&input.user_name)
            .ok_or_else(|| DispatchError::UserNotFound(input.user_name.clone()))?;

        let chain = profile
            .to_user()
            .and_then(|user| ChannelChain::for_user(&user, &self.registry))
            .map_err(|source| DispatchError::InvalidChannel {
                user: input.user_name.clone(),
                source,
            })?;

        let request = DispatchRequest::new(
            self.ids.next(),
            input.user_name,
            input.message,
            input.priority,
        );

        let mut options = options.clone();
        if options.send_timeout.is_none() {
            options.send_timeout = self.send_timeout;
        }

        let span = tracing::info_span!(
            "dispatch",
            request_id = %request.id,
            user = %request.user,
            priority = %request.priority,
        );
        let result = chain
            .dispatch(&request, &self.log, &self.clock, &options)
            .instrument(span)
            .await;
        Ok(result)
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
