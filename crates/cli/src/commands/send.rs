// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `herald send`: dispatch one notification

use anyhow::Result;
use clap::Args;
use herald_engine::{DispatchOptions, NotifyInput};

use super::AppDispatcher;
use crate::exit_error::{result_code, ExitError, DELIVERED};
use crate::output::{print_json, render_result, OutputFormat};

#[derive(Args)]
pub struct SendArgs {
    /// Recipient, as named in the config
    #[arg(long, short = 'u')]
    pub user: String,

    /// Notification text
    #[arg(long, short = 'm')]
    pub message: String,

    /// Priority label prefixed to the message, e.g. "high"
    #[arg(long, short = 'p', default_value = "")]
    pub priority: String,
}

pub async fn handle(args: SendArgs, dispatcher: &AppDispatcher, format: OutputFormat) -> Result<()> {
    let options = DispatchOptions::default().with_cancel(super::cancel_on_interrupt());
    let input = NotifyInput::new(args.user, args.message, args.priority);

    let result = dispatcher
        .notify_with(input, &options)
        .await
        .map_err(|e| ExitError::from_dispatch(&e))?;

    match format {
        OutputFormat::Text => print!("{}", render_result(&result)),
        OutputFormat::Json => print_json(&result)?,
    }

    match result_code(&result) {
        DELIVERED => Ok(()),
        code => Err(ExitError::silent(code).into()),
    }
}
