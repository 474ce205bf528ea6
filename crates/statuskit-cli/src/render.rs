//! # Render Subcommand
//!
//! Renders every status held in a snapshot file, deliveries first, each
//! list in file order.
//!
//! ```yaml
//! deliveries:
//!   - status: pending
//!     sender: Alice
//!   - status: delivered
//!     delivery_date: "2024-11-18"
//!     recipient: Bob
//! apps:
//!   - status: error
//!     problem: NETWORK
//!   - status: ok
//!     data: [Data1, Data2]
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};

use statuskit_state::{classify, classify_app, AppStatus, DeliveryStatus};

use crate::load_document;
use crate::output::{write_status, OutputFormat};

/// Arguments for the `statuskit render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Snapshot file (.json, .yaml or .yml).
    pub path: PathBuf,
}

/// Statuses to render. Either list may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    /// Delivery statuses.
    #[serde(default)]
    pub deliveries: Vec<DeliveryStatus>,
    /// Application statuses.
    #[serde(default)]
    pub apps: Vec<AppStatus>,
}

/// Execute the render subcommand.
pub fn run_render<W: Write + ?Sized>(
    args: &RenderArgs,
    format: OutputFormat,
    out: &mut W,
) -> Result<u8> {
    let snapshot: Snapshot = load_document(&args.path)?;
    tracing::info!(
        deliveries = snapshot.deliveries.len(),
        apps = snapshot.apps.len(),
        "rendering snapshot"
    );
    for status in &snapshot.deliveries {
        write_status(out, format, status, &classify(status))?;
    }
    for status in &snapshot.apps {
        write_status(out, format, status, &classify_app(status))?;
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_file(name: &str, content: &str) -> Result<String> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(name);
        std::fs::write(&path, content)?;
        let mut out = Vec::new();
        run_render(&RenderArgs { path }, OutputFormat::Text, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn renders_json_snapshot_in_order() {
        let text = render_file(
            "statuses.json",
            r#"{
                "deliveries": [
                    {"status": "canceled", "reason": "Address not found"},
                    {"status": "in_transit", "estimated_delivery_date": "2024-11-20"}
                ],
                "apps": [{"status": "error", "problem": "TIMEOUT"}]
            }"#,
        )
        .unwrap();
        assert_eq!(
            text,
            "The delivery was canceled due to: Address not found.\n\
             The package is in transit and expected to arrive by 2024-11-20.\n\
             Request timed out\n"
        );
    }

    #[test]
    fn renders_yaml_snapshot() {
        let text = render_file(
            "statuses.yaml",
            "apps:\n  - status: ok\n    data: [Data1, Data2]\n",
        )
        .unwrap();
        assert_eq!(text, "Data received: [Data1, Data2]\n");
    }

    #[test]
    fn rejects_fields_of_another_variant() {
        let err = render_file(
            "statuses.json",
            r#"{"deliveries": [{"status": "pending", "sender": "Alice", "reason": "wrong field"}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("snapshot error"));
        assert!(err.to_string().contains("reason"));
    }

    #[test]
    fn rejects_fields_on_loading_app() {
        let err = render_file(
            "statuses.yaml",
            "apps:\n  - status: loading\n    problem: NETWORK\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("snapshot error"));
        assert!(err.to_string().contains("problem"));
    }

    #[test]
    fn rejects_unknown_sections() {
        let err = render_file("statuses.json", r#"{"parcels": []}"#).unwrap_err();
        assert!(err.to_string().contains("parcels"));
    }
}
