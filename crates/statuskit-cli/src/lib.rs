//! # statuskit-cli — Rendering Front End
//!
//! Provides the `statuskit` command-line interface. Every subcommand builds
//! one or more status values, hands them to the core for classification,
//! and writes the result. The core crates perform no I/O; all printing and
//! file access lives here.
//!
//! ## Subcommands
//!
//! - `statuskit delivery` — Render a delivery status built from flags.
//! - `statuskit app` — Render an application status built from flags.
//! - `statuskit render` — Render every status in a JSON/YAML snapshot.
//! - `statuskit track` — Replay delivery events with legality checks.
//! - `statuskit demo` — Render the reference scenarios.
//!
//! ```bash
//! statuskit delivery pending --sender Alice
//! statuskit app error --problem network
//! statuskit --format json render statuses.yaml
//! ```

pub mod app;
pub mod delivery;
pub mod demo;
pub mod output;
pub mod render;
pub mod track;

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use statuskit_core::StatusKitError;

/// Read a JSON or YAML document, choosing the parser by file extension.
///
/// `.yaml` and `.yml` are parsed as YAML; anything else as JSON.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parsed = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        _ => serde_json::from_str(&content).map_err(|e| e.to_string()),
    };
    let document = parsed
        .map_err(|e| StatusKitError::Snapshot(format!("{}: {e}", path.display())))?;
    tracing::debug!(path = %path.display(), "loaded document");
    Ok(document)
}
