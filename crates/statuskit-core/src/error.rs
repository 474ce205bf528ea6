//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! Totality errors carry the name of the closed set and every offending
//! variant name, so the component assembling a handler table can report
//! the whole defect in one pass.

use thiserror::Error;

/// Top-level error type for statuskit.
#[derive(Error, Debug)]
pub enum StatusKitError {
    /// A handler table does not cover its closed set.
    #[error("non-exhaustive handler table: {0}")]
    Totality(#[from] TotalityError),

    /// A lifecycle transition was rejected.
    #[error("invalid state transition: {0}")]
    InvalidTransition(String),

    /// A state snapshot could not be decoded.
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// Text did not name any problem code.
    #[error("unknown problem code: {0:?}")]
    UnknownProblemCode(String),
}

/// Rejection raised while assembling a handler table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TotalityError {
    /// One or more declared variants have no handler.
    #[error("{set} handler table is missing variants: {}", missing.join(", "))]
    Missing {
        /// Closed set the table was built for.
        set: &'static str,
        /// Every unhandled variant, in declaration order.
        missing: Vec<&'static str>,
    },

    /// A handler names a variant the closed set does not declare.
    #[error("{set} has no variant named {variant:?}")]
    UnknownVariant {
        /// Closed set the table was built for.
        set: &'static str,
        /// The name that was registered.
        variant: String,
    },

    /// A variant was registered more than once.
    #[error("{set} variant {variant} has more than one handler")]
    DuplicateHandler {
        /// Closed set the table was built for.
        set: &'static str,
        /// The variant registered twice.
        variant: &'static str,
    },
}
