//! # Closed Variant Sets
//!
//! A `ClosedSet` is a sum type whose variants are fixed and enumerable.
//! The list in [`ClosedSet::VARIANTS`] is the registry consulted when a
//! handler table is assembled at runtime; the Rust `match` over the enum is
//! what keeps static dispatch total.
//!
//! Implementations must keep `VARIANTS` and `variant()` in sync. The
//! state crate checks this in its tests by visiting one value of every
//! variant.

/// A closed sum type with a compile-time enumerable set of leaf variants.
pub trait ClosedSet {
    /// Name of the closed set, used in diagnostics.
    const SET: &'static str;

    /// Every leaf variant name, in declaration order.
    ///
    /// Variants carrying a nested closed set contribute one path-qualified
    /// entry per nested member (e.g. `"Error::Timeout"`) instead of one
    /// entry for themselves.
    const VARIANTS: &'static [&'static str];

    /// Leaf variant name of this value. Always an element of `VARIANTS`.
    fn variant(&self) -> &'static str;

    /// Position of [`ClosedSet::variant`] within `VARIANTS`.
    fn variant_index(&self) -> usize;

    /// Whether `name` is a declared leaf variant.
    fn contains(name: &str) -> bool {
        Self::index_of(name).is_some()
    }

    /// Position of `name` within `VARIANTS`, if declared.
    fn index_of(name: &str) -> Option<usize> {
        Self::VARIANTS.iter().position(|v| *v == name)
    }
}
