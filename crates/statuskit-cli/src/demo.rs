//! # Demo Subcommand
//!
//! Renders the reference scenarios: the four delivery variants, then a
//! network error, a loading screen and a data payload. Application
//! statuses are also logged at a severity chosen through a registered
//! `HandlerTable`, so a table that misses a leaf aborts the command
//! before anything is rendered.

use std::io::Write;

use anyhow::Result;

use statuskit_state::{
    classify, classify_app, AppStatus, DeliveryStatus, HandlerTable, HandlerTableBuilder,
    ProblemCode, TotalityError,
};

use crate::output::{write_heading, write_status, OutputFormat};

/// Log level used when an application status is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Transient state.
    Debug,
    /// Expected outcome.
    Info,
    /// Failure worth surfacing.
    Warn,
}

/// Delivery scenarios, one per variant.
pub fn delivery_scenarios() -> Vec<DeliveryStatus> {
    vec![
        DeliveryStatus::pending("Alice"),
        DeliveryStatus::in_transit("2024-11-20"),
        DeliveryStatus::delivered("2024-11-18", "Bob"),
        DeliveryStatus::canceled("Address not found"),
    ]
}

/// Application scenarios.
pub fn app_scenarios() -> Vec<AppStatus> {
    vec![
        AppStatus::error(ProblemCode::Network),
        AppStatus::Loading,
        AppStatus::ok(["Data1", "Data2"]),
    ]
}

/// Severity per application leaf.
pub fn severity_table() -> Result<HandlerTable<'static, AppStatus, Severity>, TotalityError> {
    HandlerTableBuilder::new()
        .on("Loading", |_| Severity::Debug)
        .on("Error::Network", |_| Severity::Warn)
        .on("Error::Timeout", |_| Severity::Warn)
        .on("Error::Unknown", |_| Severity::Warn)
        .on("Ok", |_| Severity::Info)
        .build()
}

/// Execute the demo subcommand.
pub fn run_demo<W: Write + ?Sized>(format: OutputFormat, out: &mut W) -> Result<u8> {
    let severities = severity_table()?;

    write_heading(out, format, "Delivery status")?;
    for status in delivery_scenarios() {
        write_status(out, format, &status, &classify(&status))?;
    }

    if format == OutputFormat::Text {
        writeln!(out)?;
    }
    write_heading(out, format, "App status")?;
    for status in app_scenarios() {
        let description = classify_app(&status);
        match severities.dispatch(&status) {
            Severity::Debug => tracing::debug!(status = status.name(), "{description}"),
            Severity::Info => tracing::info!(status = status.name(), "{description}"),
            Severity::Warn => tracing::warn!(status = status.name(), "{description}"),
        }
        write_status(out, format, &status, &description)?;
    }
    Ok(0)
}
