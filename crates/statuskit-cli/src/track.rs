//! # Track Subcommand
//!
//! Replays a delivery journey through `DeliveryTracker`, rendering the
//! starting status and the status after every event. Stops at the first
//! illegal event with a non-zero exit.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

use statuskit_core::StatusKitError;
use statuskit_state::{classify, DeliveryEvent, DeliveryStatus, DeliveryTracker};

use crate::load_document;
use crate::output::{write_status, OutputFormat};

/// Arguments for the `statuskit track` subcommand.
#[derive(Args, Debug)]
pub struct TrackArgs {
    /// Journey file (.json, .yaml or .yml).
    pub path: PathBuf,
}

/// A starting status and the events applied to it, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Journey {
    /// Status the delivery starts from.
    pub initial: DeliveryStatus,
    /// Events to apply.
    #[serde(default)]
    pub events: Vec<DeliveryEvent>,
}

/// Execute the track subcommand.
pub fn run_track<W: Write + ?Sized>(
    args: &TrackArgs,
    format: OutputFormat,
    out: &mut W,
) -> Result<u8> {
    let journey: Journey = load_document(&args.path)?;
    let mut tracker = DeliveryTracker::new(journey.initial);
    write_status(out, format, tracker.status(), &classify(tracker.status()))?;

    for (index, event) in journey.events.into_iter().enumerate() {
        let status = tracker
            .apply(event)
            .map_err(StatusKitError::from)
            .with_context(|| format!("event #{} rejected", index + 1))?;
        write_status(out, format, status, &classify(status))?;
    }

    tracing::info!(
        transitions = tracker.transitions().len(),
        terminal = tracker.is_terminal(),
        "journey replayed"
    );
    Ok(0)
}
