//! # statuskit-core — Closed Variant Primitives
//!
//! This crate is the leaf of the statuskit workspace. It defines the
//! vocabulary every closed state type shares and nothing else:
//!
//! 1. **`ClosedSet`.** A closed sum type publishes the complete, ordered
//!    list of its leaf variant names. Nested closed sets are flattened into
//!    path-qualified leaves (`"Error::Network"`), so a registration-time
//!    totality check covers every level at once.
//!
//! 2. **One error hierarchy.** Totality failures are programming defects,
//!    not data problems. They are reported through [`TotalityError`] when a
//!    handler table is assembled and never at dispatch time.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `statuskit-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod variant;

pub use error::{StatusKitError, TotalityError};
pub use variant::ClosedSet;
