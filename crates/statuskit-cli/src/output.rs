//! # Output Formatting
//!
//! Text mode writes the description alone. JSON mode writes one object per
//! line carrying the status snapshot and its description.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// Output format for rendered statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Description only, one per line.
    #[default]
    Text,
    /// `{"status": ..., "description": ...}`, one object per line.
    Json,
}

/// Write one rendered status.
pub fn write_status<W, S>(
    out: &mut W,
    format: OutputFormat,
    status: &S,
    description: &str,
) -> Result<()>
where
    W: Write + ?Sized,
    S: Serialize + ?Sized,
{
    match format {
        OutputFormat::Text => writeln!(out, "{description}")?,
        OutputFormat::Json => {
            let snapshot = serde_json::to_value(status)?;
            let line = serde_json::json!({
                "status": snapshot,
                "description": description,
            });
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Write a section heading. Headings appear in text mode only.
pub fn write_heading<W: Write + ?Sized>(out: &mut W, format: OutputFormat, title: &str) -> Result<()> {
    if format == OutputFormat::Text {
        writeln!(out, "--- {title} ---")?;
    }
    Ok(())
}
