//! # Delivery Lifecycle
//!
//! Opt-in legality checking for delivery status changes. Nothing in
//! [`crate::delivery`] depends on this module: any `DeliveryStatus` can be
//! constructed and rendered directly. Callers that drive a delivery
//! through its life use [`DeliveryTracker`] instead.
//!
//! ## Allowed Transitions
//!
//! ```text
//! Pending ──picked_up()──▶ InTransit ──delivered()──▶ Delivered
//!    │                       │    ▲
//!    │                       │    └── rescheduled()
//!    │                       │
//!    └──────canceled()───────┴──────▶ Canceled
//! ```
//!
//! `Delivered` and `Canceled` are terminal and accept no event.
//!
//! The status types themselves place no order on their variants. This
//! table is one chosen policy: a reschedule keeps a delivery in transit,
//! and a pending delivery must be picked up before it can be delivered.
//! Callers needing a different policy can skip the tracker and build
//! statuses directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use statuskit_core::StatusKitError;

use crate::delivery::DeliveryStatus;

// ─── Events ──────────────────────────────────────────────────────────

/// Something that happened to a delivery.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case", deny_unknown_fields)]
pub enum DeliveryEvent {
    /// Carrier collected the package.
    PickedUp {
        /// First arrival estimate.
        estimated_delivery_date: String,
    },
    /// Carrier revised the arrival estimate.
    Rescheduled {
        /// New arrival estimate.
        estimated_delivery_date: String,
    },
    /// Package handed over.
    Delivered {
        /// Date of the handover.
        delivery_date: String,
        /// Party that received the package.
        recipient: String,
    },
    /// Delivery called off.
    Canceled {
        /// Why the delivery was called off.
        reason: String,
    },
}

impl DeliveryEvent {
    /// Canonical upper-case event name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PickedUp { .. } => "PICKED_UP",
            Self::Rescheduled { .. } => "RESCHEDULED",
            Self::Delivered { .. } => "DELIVERED",
            Self::Canceled { .. } => "CANCELED",
        }
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors raised by [`next_status`] and [`DeliveryTracker::apply`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// The event does not apply to the current status.
    #[error("invalid delivery transition: {from} cannot accept {event}")]
    Invalid {
        /// Current status name.
        from: &'static str,
        /// Rejected event name.
        event: &'static str,
    },

    /// The delivery already reached an end state.
    #[error("delivery is in terminal state {state} and cannot accept {event}")]
    Terminal {
        /// Terminal status name.
        state: &'static str,
        /// Rejected event name.
        event: &'static str,
    },
}

impl From<TransitionError> for StatusKitError {
    fn from(err: TransitionError) -> Self {
        StatusKitError::InvalidTransition(err.to_string())
    }
}

// ─── Transition Table ────────────────────────────────────────────────

/// Status reached by applying `event` to `current`.
pub fn next_status(
    current: &DeliveryStatus,
    event: DeliveryEvent,
) -> Result<DeliveryStatus, TransitionError> {
    use DeliveryEvent as E;
    use DeliveryStatus as S;

    match (current, event) {
        (
            S::Pending { .. },
            E::PickedUp {
                estimated_delivery_date,
            },
        )
        | (
            S::InTransit { .. },
            E::Rescheduled {
                estimated_delivery_date,
            },
        ) => Ok(S::InTransit {
            estimated_delivery_date,
        }),
        (
            S::InTransit { .. },
            E::Delivered {
                delivery_date,
                recipient,
            },
        ) => Ok(S::Delivered {
            delivery_date,
            recipient,
        }),
        (S::Pending { .. } | S::InTransit { .. }, E::Canceled { reason }) => {
            Ok(S::Canceled { reason })
        }
        (S::Pending { .. }, event @ (E::Rescheduled { .. } | E::Delivered { .. }))
        | (S::InTransit { .. }, event @ E::PickedUp { .. }) => Err(TransitionError::Invalid {
            from: current.name(),
            event: event.name(),
        }),
        (S::Delivered { .. } | S::Canceled { .. }, event) => Err(TransitionError::Terminal {
            state: current.name(),
            event: event.name(),
        }),
    }
}

// ─── Tracker ─────────────────────────────────────────────────────────

/// Record of one applied event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRecord {
    /// Status name before the event.
    pub from_state: String,
    /// Status name after the event.
    pub to_state: String,
    /// Applied event name.
    pub event: String,
    /// When the event was applied (UTC).
    pub at: DateTime<Utc>,
}

/// A delivery status together with the log of events that produced it.
///
/// A tracker is only built from an initial status and grown through
/// [`apply`](Self::apply), so its log always ends at its status. It cannot
/// be decoded from a document:
///
/// ```compile_fail
/// use statuskit_state::DeliveryTracker;
///
/// let tracker: DeliveryTracker = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DeliveryTracker {
    status: DeliveryStatus,
    transitions: Vec<TransitionRecord>,
}

impl DeliveryTracker {
    /// Start tracking from `initial`. No transition is recorded for it.
    pub fn new(initial: DeliveryStatus) -> Self {
        Self {
            status: initial,
            transitions: Vec::new(),
        }
    }

    /// Current status.
    pub fn status(&self) -> &DeliveryStatus {
        &self.status
    }

    /// Applied events, oldest first.
    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    /// Whether the current status is terminal.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Apply `event`. On rejection the tracker is left unchanged.
    pub fn apply(&mut self, event: DeliveryEvent) -> Result<&DeliveryStatus, TransitionError> {
        let event_name = event.name();
        let next = next_status(&self.status, event).map_err(|err| {
            tracing::debug!(error = %err, "delivery transition rejected");
            err
        })?;

        let record = TransitionRecord {
            from_state: self.status.name().to_string(),
            to_state: next.name().to_string(),
            event: event_name.to_string(),
            at: Utc::now(),
        };
        tracing::debug!(
            from = %record.from_state,
            to = %record.to_state,
            event = event_name,
            "delivery transition"
        );
        self.transitions.push(record);
        self.status = next;
        Ok(&self.status)
    }

    /// Consume the tracker, yielding the final status.
    pub fn into_status(self) -> DeliveryStatus {
        self.status
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
