//! # statuskit-state — Closed State Types and Exhaustive Dispatch
//!
//! Each status is a Rust enum: exactly one variant is active per value,
//! and the set of variants is closed. Consumers branch through handler
//! traits whose methods have no default bodies, so every consumer is
//! forced to handle every variant, on every nesting level.
//!
//! ## State Types
//!
//! - **Delivery** (`delivery.rs`): `Pending | InTransit | Delivered | Canceled`.
//!
//! - **Application** (`app.rs`): `Loading | Error | Ok`, where `Error`
//!   carries a nested closed `ProblemCode` (`Network | Timeout | Unknown`).
//!
//! ## Dispatch
//!
//! - Static: [`DeliveryHandler`], [`AppHandler`] (with [`ProblemHandler`]
//!   as supertrait) and their closure-table forms. Totality is checked by
//!   the compiler.
//!
//! - Registered (`table.rs`): [`HandlerTable`] keyed by leaf variant name,
//!   checked for totality once, when it is built.
//!
//! - [`classify`] / [`classify_app`] render the fixed human-readable
//!   description of a status. They are implemented as handlers themselves.
//!
//! ## Lifecycle
//!
//! Dispatch renders snapshots and never checks whether one status may
//! follow another. The opt-in [`DeliveryTracker`] (`lifecycle.rs`) does.
//!
//! ## Compile-Time Totality
//!
//! A handler that forgets a variant does not compile:
//!
//! ```compile_fail
//! use statuskit_state::DeliveryHandler;
//!
//! struct Silent;
//!
//! // ERROR: not all trait items implemented, missing: `canceled`
//! impl DeliveryHandler for Silent {
//!     type Output = ();
//!     fn pending(&mut self, _sender: &str) {}
//!     fn in_transit(&mut self, _date: &str) {}
//!     fn delivered(&mut self, _date: &str, _recipient: &str) {}
//! }
//! ```
//!
//! Neither does an application handler that covers the outer variants but
//! not every problem code:
//!
//! ```compile_fail
//! use statuskit_state::{AppHandler, ProblemHandler};
//!
//! struct Partial;
//!
//! // ERROR: not all trait items implemented, missing: `unknown`
//! impl ProblemHandler for Partial {
//!     type Output = ();
//!     fn network(&mut self) {}
//!     fn timeout(&mut self) {}
//! }
//!
//! impl AppHandler for Partial {
//!     fn loading(&mut self) {}
//!     fn ok(&mut self, _data: &[String]) {}
//! }
//! ```

pub mod app;
pub mod delivery;
pub mod lifecycle;
pub mod table;

// ─── Delivery re-exports ────────────────────────────────────────────

pub use delivery::{classify, dispatch_delivery, DeliveryHandler, DeliveryHandlers, DeliveryStatus};

// ─── Application re-exports ─────────────────────────────────────────

pub use app::{
    classify_app, dispatch_app, AppHandler, AppHandlers, AppStatus, ProblemCode, ProblemHandler,
    ProblemHandlers,
};

// ─── Table re-exports ───────────────────────────────────────────────

pub use table::{HandlerTable, HandlerTableBuilder};

// ─── Lifecycle re-exports ───────────────────────────────────────────

pub use lifecycle::{next_status, DeliveryEvent, DeliveryTracker, TransitionError, TransitionRecord};

pub use statuskit_core::{ClosedSet, TotalityError};
