//! # App Subcommand
//!
//! Builds one `AppStatus` from flags and renders it.

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};

use statuskit_state::{classify_app, AppStatus, ClosedSet, ProblemCode};

use crate::output::{write_status, OutputFormat};

/// Arguments for the `statuskit app` subcommand.
#[derive(Args, Debug)]
pub struct AppArgs {
    #[command(subcommand)]
    pub command: AppCommand,
}

/// One subcommand per outer application variant.
#[derive(Subcommand, Debug)]
pub enum AppCommand {
    /// Still fetching.
    Loading,

    /// Fetching failed.
    Error {
        /// Failure class: network, timeout or unknown.
        #[arg(long)]
        problem: ProblemCode,
    },

    /// Data arrived.
    Ok {
        /// Received item. Repeat for several, in order.
        #[arg(long = "data")]
        data: Vec<String>,
    },
}

impl AppCommand {
    /// The status described by these flags.
    pub fn to_status(&self) -> AppStatus {
        match self {
            Self::Loading => AppStatus::Loading,
            Self::Error { problem } => AppStatus::error(*problem),
            Self::Ok { data } => AppStatus::ok(data.iter().cloned()),
        }
    }
}

/// Execute the app subcommand.
pub fn run_app<W: Write + ?Sized>(args: &AppArgs, format: OutputFormat, out: &mut W) -> Result<u8> {
    let status = args.command.to_status();
    tracing::info!(variant = status.variant(), "rendering app status");
    write_status(out, format, &status, &classify_app(&status))?;
    Ok(0)
}
