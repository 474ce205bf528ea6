//! # Delivery Status
//!
//! The closed set of shapes a parcel delivery can be observed in.
//!
//! ## Variants
//!
//! - `Pending` → waiting to be picked up from the sender.
//! - `InTransit` → moving, with an estimated delivery date.
//! - `Delivered` → handed to the recipient on a given date (terminal).
//! - `Canceled` → abandoned for a stated reason (terminal).
//!
//! ## Dispatch
//!
//! [`DeliveryStatus::dispatch`] is a single `match` with one arm per
//! variant and no wildcard. Every consumer goes through a
//! [`DeliveryHandler`], whose four methods have no default bodies, so a
//! fifth variant cannot be added without every handler in the workspace
//! failing to compile until it handles it.
//!
//! This module renders snapshots only. It does not decide whether one
//! status may follow another; see [`crate::lifecycle`] for that.

use serde::{Deserialize, Serialize};

use statuskit_core::ClosedSet;

// ─── Delivery Status ─────────────────────────────────────────────────

/// Observed status of a delivery.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case", deny_unknown_fields)]
pub enum DeliveryStatus {
    /// Waiting for pickup.
    Pending {
        /// Party the package is collected from.
        sender: String,
    },
    /// On its way.
    InTransit {
        /// Expected arrival date, as supplied by the carrier.
        estimated_delivery_date: String,
    },
    /// Handed over (terminal).
    Delivered {
        /// Date of the handover.
        delivery_date: String,
        /// Party that received the package.
        recipient: String,
    },
    /// Abandoned (terminal).
    Canceled {
        /// Why the delivery was called off.
        reason: String,
    },
}

impl DeliveryStatus {
    /// Build a `Pending` status.
    pub fn pending(sender: impl Into<String>) -> Self {
        Self::Pending {
            sender: sender.into(),
        }
    }

    /// Build an `InTransit` status.
    pub fn in_transit(estimated_delivery_date: impl Into<String>) -> Self {
        Self::InTransit {
            estimated_delivery_date: estimated_delivery_date.into(),
        }
    }

    /// Build a `Delivered` status.
    pub fn delivered(delivery_date: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self::Delivered {
            delivery_date: delivery_date.into(),
            recipient: recipient.into(),
        }
    }

    /// Build a `Canceled` status.
    pub fn canceled(reason: impl Into<String>) -> Self {
        Self::Canceled {
            reason: reason.into(),
        }
    }

    /// Canonical upper-case state name (e.g. "IN_TRANSIT").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending { .. } => "PENDING",
            Self::InTransit { .. } => "IN_TRANSIT",
            Self::Delivered { .. } => "DELIVERED",
            Self::Canceled { .. } => "CANCELED",
        }
    }

    /// Whether the delivery has reached an end state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered { .. } | Self::Canceled { .. })
    }

    /// Sender of a pending delivery.
    pub fn sender(&self) -> Option<&str> {
        match self {
            Self::Pending { sender } => Some(sender.as_str()),
            _ => None,
        }
    }

    /// Estimated arrival of a delivery in transit.
    pub fn estimated_delivery_date(&self) -> Option<&str> {
        match self {
            Self::InTransit {
                estimated_delivery_date,
            } => Some(estimated_delivery_date.as_str()),
            _ => None,
        }
    }

    /// Handover date and recipient of a delivered package.
    pub fn delivery(&self) -> Option<(&str, &str)> {
        match self {
            Self::Delivered {
                delivery_date,
                recipient,
            } => Some((delivery_date.as_str(), recipient.as_str())),
            _ => None,
        }
    }

    /// Cancellation reason.
    pub fn cancel_reason(&self) -> Option<&str> {
        match self {
            Self::Canceled { reason } => Some(reason.as_str()),
            _ => None,
        }
    }

    /// Invoke exactly one method of `handler`, chosen by the active variant.
    pub fn dispatch<H>(&self, handler: &mut H) -> H::Output
    where
        H: DeliveryHandler + ?Sized,
    {
        match self {
            Self::Pending { sender } => handler.pending(sender),
            Self::InTransit {
                estimated_delivery_date,
            } => handler.in_transit(estimated_delivery_date),
            Self::Delivered {
                delivery_date,
                recipient,
            } => handler.delivered(delivery_date, recipient),
            Self::Canceled { reason } => handler.canceled(reason),
        }
    }

    /// Human-readable description of this status.
    pub fn classify(&self) -> String {
        self.dispatch(&mut Description)
    }
}

impl ClosedSet for DeliveryStatus {
    const SET: &'static str = "DeliveryStatus";
    const VARIANTS: &'static [&'static str] = &["Pending", "InTransit", "Delivered", "Canceled"];

    fn variant(&self) -> &'static str {
        Self::VARIANTS[self.variant_index()]
    }

    fn variant_index(&self) -> usize {
        match self {
            Self::Pending { .. } => 0,
            Self::InTransit { .. } => 1,
            Self::Delivered { .. } => 2,
            Self::Canceled { .. } => 3,
        }
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.classify())
    }
}

// ─── Handlers ────────────────────────────────────────────────────────

/// One branch per [`DeliveryStatus`] variant.
///
/// None of the methods has a default body. An implementation that leaves
/// one out is rejected by the compiler.
pub trait DeliveryHandler {
    /// Value produced by every branch.
    type Output;

    /// Branch for `Pending`.
    fn pending(&mut self, sender: &str) -> Self::Output;

    /// Branch for `InTransit`.
    fn in_transit(&mut self, estimated_delivery_date: &str) -> Self::Output;

    /// Branch for `Delivered`.
    fn delivered(&mut self, delivery_date: &str, recipient: &str) -> Self::Output;

    /// Branch for `Canceled`.
    fn canceled(&mut self, reason: &str) -> Self::Output;
}

/// A [`DeliveryHandler`] assembled from one closure per variant.
///
/// ```
/// use statuskit_state::{DeliveryHandlers, DeliveryStatus};
///
/// let mut short = DeliveryHandlers::new(
///     |sender| format!("waiting on {sender}"),
///     |eta| format!("eta {eta}"),
///     |date, who| format!("{who} @ {date}"),
///     |why| format!("canceled: {why}"),
/// );
/// let status = DeliveryStatus::delivered("2024-11-18", "Bob");
/// assert_eq!(status.dispatch(&mut short), "Bob @ 2024-11-18");
/// ```
pub struct DeliveryHandlers<P, T, D, C> {
    pending: P,
    in_transit: T,
    delivered: D,
    canceled: C,
}

impl<P, T, D, C> DeliveryHandlers<P, T, D, C> {
    /// Bundle one closure per variant, in declaration order.
    pub fn new<R>(pending: P, in_transit: T, delivered: D, canceled: C) -> Self
    where
        P: FnMut(&str) -> R,
        T: FnMut(&str) -> R,
        D: FnMut(&str, &str) -> R,
        C: FnMut(&str) -> R,
    {
        Self {
            pending,
            in_transit,
            delivered,
            canceled,
        }
    }
}

impl<P, T, D, C, R> DeliveryHandler for DeliveryHandlers<P, T, D, C>
where
    P: FnMut(&str) -> R,
    T: FnMut(&str) -> R,
    D: FnMut(&str, &str) -> R,
    C: FnMut(&str) -> R,
{
    type Output = R;

    fn pending(&mut self, sender: &str) -> R {
        (self.pending)(sender)
    }

    fn in_transit(&mut self, estimated_delivery_date: &str) -> R {
        (self.in_transit)(estimated_delivery_date)
    }

    fn delivered(&mut self, delivery_date: &str, recipient: &str) -> R {
        (self.delivered)(delivery_date, recipient)
    }

    fn canceled(&mut self, reason: &str) -> R {
        (self.canceled)(reason)
    }
}

/// Dispatch `status` to `handler`.
pub fn dispatch_delivery<H>(status: &DeliveryStatus, handler: &mut H) -> H::Output
where
    H: DeliveryHandler + ?Sized,
{
    status.dispatch(handler)
}

/// Human-readable description of a delivery status.
pub fn classify(status: &DeliveryStatus) -> String {
    status.classify()
}

struct Description;

impl DeliveryHandler for Description {
    type Output = String;

    fn pending(&mut self, sender: &str) -> String {
        format!("The package is pending pickup from {sender}.")
    }

    fn in_transit(&mut self, estimated_delivery_date: &str) -> String {
        format!("The package is in transit and expected to arrive by {estimated_delivery_date}.")
    }

    fn delivered(&mut self, delivery_date: &str, recipient: &str) -> String {
        format!("The package was delivered to {recipient} on {delivery_date}.")
    }

    fn canceled(&mut self, reason: &str) -> String {
        format!("The delivery was canceled due to: {reason}.")
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
