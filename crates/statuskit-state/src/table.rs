//! # Registration-Checked Handler Tables
//!
//! For callers that assemble handlers at runtime (plugins, configuration
//! driven renderers), the static traits in [`crate::delivery`] and
//! [`crate::app`] are not usable. `HandlerTable` covers that case with the
//! same guarantee moved to construction time:
//!
//! - handlers are registered by leaf variant name through
//!   [`HandlerTableBuilder::on`];
//! - [`HandlerTableBuilder::build`] rejects a table that leaves any leaf of
//!   [`ClosedSet::VARIANTS`] unhandled, names a variant the set does not
//!   declare, or registers a variant twice;
//! - a built table is immutable and [`HandlerTable::dispatch`] cannot fail.
//!
//! Nested sets are checked through their path-qualified leaves: an
//! `AppStatus` table without `"Error::Timeout"` does not build.

use statuskit_core::{ClosedSet, TotalityError};

type BoxedHandler<'h, S, R> = Box<dyn Fn(&S) -> R + Send + Sync + 'h>;

/// Collects one handler per leaf variant of `S`.
pub struct HandlerTableBuilder<'h, S, R> {
    slots: Vec<Option<BoxedHandler<'h, S, R>>>,
    rejected: Option<TotalityError>,
}

impl<'h, S: ClosedSet, R> HandlerTableBuilder<'h, S, R> {
    /// Start an empty table for `S`.
    pub fn new() -> Self {
        Self {
            slots: S::VARIANTS.iter().map(|_| None).collect(),
            rejected: None,
        }
    }

    /// Register `handler` for the leaf variant called `variant`.
    ///
    /// The first registration problem is kept and reported by
    /// [`HandlerTableBuilder::build`]; later calls are ignored once one
    /// has been recorded.
    pub fn on<F>(mut self, variant: &str, handler: F) -> Self
    where
        F: Fn(&S) -> R + Send + Sync + 'h,
    {
        if self.rejected.is_some() {
            return self;
        }
        match S::index_of(variant) {
            None => {
                self.rejected = Some(TotalityError::UnknownVariant {
                    set: S::SET,
                    variant: variant.to_string(),
                });
            }
            Some(index) if self.slots[index].is_some() => {
                self.rejected = Some(TotalityError::DuplicateHandler {
                    set: S::SET,
                    variant: S::VARIANTS[index],
                });
            }
            Some(index) => self.slots[index] = Some(Box::new(handler)),
        }
        self
    }

    /// Leaf variants that still have no handler, in declaration order.
    pub fn missing(&self) -> Vec<&'static str> {
        S::VARIANTS
            .iter()
            .zip(&self.slots)
            .filter(|(_, slot)| slot.is_none())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Finish the table, proving it total over `S`.
    pub fn build(self) -> Result<HandlerTable<'h, S, R>, TotalityError> {
        if let Some(err) = self.rejected {
            tracing::warn!(set = S::SET, error = %err, "handler table rejected");
            return Err(err);
        }
        let missing = self.missing();
        if !missing.is_empty() {
            let err = TotalityError::Missing {
                set: S::SET,
                missing,
            };
            tracing::warn!(set = S::SET, error = %err, "handler table rejected");
            return Err(err);
        }
        Ok(HandlerTable {
            handlers: self.slots.into_iter().flatten().collect(),
        })
    }
}

impl<'h, S: ClosedSet, R> Default for HandlerTableBuilder<'h, S, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ClosedSet, R> std::fmt::Debug for HandlerTableBuilder<'_, S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerTableBuilder")
            .field("set", &S::SET)
            .field("missing", &self.missing())
            .field("rejected", &self.rejected)
            .finish()
    }
}

/// A handler table proven total over `S` when it was built.
pub struct HandlerTable<'h, S, R> {
    handlers: Vec<BoxedHandler<'h, S, R>>,
}

impl<S: ClosedSet, R> HandlerTable<'_, S, R> {
    /// Run the handler registered for the active leaf variant of `value`.
    pub fn dispatch(&self, value: &S) -> R {
        (self.handlers[value.variant_index()])(value)
    }

    /// Number of handlers, equal to `S::VARIANTS.len()`.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Always false for a built table unless `S` declares no variants.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<S: ClosedSet, R> std::fmt::Debug for HandlerTable<'_, S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerTable")
            .field("set", &S::SET)
            .field("variants", &S::VARIANTS)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppStatus, DeliveryStatus, ProblemCode};

    fn delivery_builder() -> HandlerTableBuilder<'static, DeliveryStatus, &'static str> {
        HandlerTableBuilder::new()
            .on("Pending", |_| "pending")
            .on("InTransit", |_| "in_transit")
            .on("Delivered", |_| "delivered")
    }

    // ── Totality ─────────────────────────────────────────────────────

    #[test]
    fn test_build_rejects_missing_variant() {
        let err = delivery_builder().build().unwrap_err();
        assert_eq!(
            err,
            TotalityError::Missing {
                set: "DeliveryStatus",
                missing: vec!["Canceled"],
            }
        );
    }

    #[test]
    fn test_build_rejects_unknown_variant() {
        let err = delivery_builder()
            .on("Canceled", |_| "canceled")
            .on("Lost", |_| "lost")
            .build()
            .unwrap_err();
        assert!(matches!(err, TotalityError::UnknownVariant { ref variant, .. } if variant == "Lost"));
    }

    #[test]
    fn test_build_rejects_duplicate_handler() {
        let err = delivery_builder()
            .on("Pending", |_| "again")
            .on("Canceled", |_| "canceled")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            TotalityError::DuplicateHandler {
                set: "DeliveryStatus",
                variant: "Pending",
            }
        );
    }

    #[test]
    fn test_nested_leaf_missing_is_rejected() {
        let err = HandlerTableBuilder::<AppStatus, u8>::new()
            .on("Loading", |_| 0)
            .on("Error::Network", |_| 1)
            .on("Error::Unknown", |_| 3)
            .on("Ok", |_| 4)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            TotalityError::Missing {
                set: "AppStatus",
                missing: vec!["Error::Timeout"],
            }
        );
    }

    #[test]
    fn test_outer_name_does_not_cover_nested_leaves() {
        let err = HandlerTableBuilder::<AppStatus, u8>::new()
            .on("Error", |_| 1)
            .build()
            .unwrap_err();
        assert!(matches!(err, TotalityError::UnknownVariant { .. }));
    }

    #[test]
    fn test_missing_reports_progress() {
        let builder = HandlerTableBuilder::<ProblemCode, ()>::new().on("Timeout", |_| ());
        assert_eq!(builder.missing(), ["Network", "Unknown"]);
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    #[test]
    fn test_total_table_dispatches_by_variant() {
        let table = delivery_builder()
            .on("Canceled", |_| "canceled")
            .build()
            .unwrap();
        assert_eq!(table.len(), DeliveryStatus::VARIANTS.len());
        assert_eq!(table.dispatch(&DeliveryStatus::canceled("x")), "canceled");
        assert_eq!(table.dispatch(&DeliveryStatus::pending("x")), "pending");
    }

    #[test]
    fn test_registration_order_is_irrelevant() {
        let table = HandlerTableBuilder::<ProblemCode, &str>::new()
            .on("Unknown", |_| "u")
            .on("Network", |_| "n")
            .on("Timeout", |_| "t")
            .build()
            .unwrap();
        assert_eq!(table.dispatch(&ProblemCode::Network), "n");
        assert_eq!(table.dispatch(&ProblemCode::Timeout), "t");
        assert_eq!(table.dispatch(&ProblemCode::Unknown), "u");
    }

    #[test]
    fn test_handler_reads_fields_through_accessors() {
        let table = HandlerTableBuilder::<AppStatus, usize>::new()
            .on("Loading", |_| 0)
            .on("Error::Network", |_| 0)
            .on("Error::Timeout", |_| 0)
            .on("Error::Unknown", |_| 0)
            .on("Ok", |s| s.data().map_or(0, <[String]>::len))
            .build()
            .unwrap();
        assert_eq!(table.dispatch(&AppStatus::ok(["Data1", "Data2"])), 2);
    }
}
