//! # Delivery Subcommand
//!
//! Builds one `DeliveryStatus` from flags and renders it.
//!
//! ## Subcommands
//!
//! - `pending --sender S`
//! - `in-transit --estimated-delivery-date D`
//! - `delivered --delivery-date D --recipient R`
//! - `canceled --reason R`

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};

use statuskit_state::{classify, ClosedSet, DeliveryStatus};

use crate::output::{write_status, OutputFormat};

/// Arguments for the `statuskit delivery` subcommand.
#[derive(Args, Debug)]
pub struct DeliveryArgs {
    #[command(subcommand)]
    pub command: DeliveryCommand,
}

/// One subcommand per delivery variant.
#[derive(Subcommand, Debug)]
pub enum DeliveryCommand {
    /// Waiting for pickup.
    Pending {
        /// Party the package is collected from.
        #[arg(long)]
        sender: String,
    },

    /// On its way.
    InTransit {
        /// Expected arrival date.
        #[arg(long)]
        estimated_delivery_date: String,
    },

    /// Handed over.
    Delivered {
        /// Date of the handover.
        #[arg(long)]
        delivery_date: String,
        /// Party that received the package.
        #[arg(long)]
        recipient: String,
    },

    /// Called off.
    Canceled {
        /// Why the delivery was called off.
        #[arg(long)]
        reason: String,
    },
}

impl DeliveryCommand {
    /// The status described by these flags.
    pub fn to_status(&self) -> DeliveryStatus {
        match self {
            Self::Pending { sender } => DeliveryStatus::pending(sender.as_str()),
            Self::InTransit {
                estimated_delivery_date,
            } => DeliveryStatus::in_transit(estimated_delivery_date.as_str()),
            Self::Delivered {
                delivery_date,
                recipient,
            } => DeliveryStatus::delivered(delivery_date.as_str(), recipient.as_str()),
            Self::Canceled { reason } => DeliveryStatus::canceled(reason.as_str()),
        }
    }
}

/// Execute the delivery subcommand.
pub fn run_delivery<W: Write + ?Sized>(
    args: &DeliveryArgs,
    format: OutputFormat,
    out: &mut W,
) -> Result<u8> {
    let status = args.command.to_status();
    tracing::info!(variant = status.variant(), "rendering delivery status");
    write_status(out, format, &status, &classify(&status))?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(command: DeliveryCommand) -> String {
        let mut out = Vec::new();
        let code = run_delivery(&DeliveryArgs { command }, OutputFormat::Text, &mut out).unwrap();
        assert_eq!(code, 0);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_pending() {
        let text = render(DeliveryCommand::Pending {
            sender: "Alice".into(),
        });
        assert_eq!(text, "The package is pending pickup from Alice.\n");
    }

    #[test]
    fn renders_delivered() {
        let text = render(DeliveryCommand::Delivered {
            delivery_date: "2024-11-18".into(),
            recipient: "Bob".into(),
        });
        assert_eq!(text, "The package was delivered to Bob on 2024-11-18.\n");
    }

    #[test]
    fn to_status_keeps_field_values() {
        let command = DeliveryCommand::InTransit {
            estimated_delivery_date: "2024-11-20".into(),
        };
        assert_eq!(command.to_status(), DeliveryStatus::in_transit("2024-11-20"));
    }
}
