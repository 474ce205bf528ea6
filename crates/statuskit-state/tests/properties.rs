//! Property tests for construction, equality and classification.

use proptest::prelude::*;

use statuskit_state::{classify, classify_app, AppStatus, ClosedSet, DeliveryStatus, ProblemCode};

fn field() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 -]{1,24}"
}

fn delivery() -> impl Strategy<Value = DeliveryStatus> {
    prop_oneof![
        field().prop_map(|s| DeliveryStatus::pending(s)),
        field().prop_map(|d| DeliveryStatus::in_transit(d)),
        (field(), field()).prop_map(|(d, r)| DeliveryStatus::delivered(d, r)),
        field().prop_map(|r| DeliveryStatus::canceled(r)),
    ]
}

fn problem() -> impl Strategy<Value = ProblemCode> {
    prop_oneof![
        Just(ProblemCode::Network),
        Just(ProblemCode::Timeout),
        Just(ProblemCode::Unknown),
    ]
}

fn app() -> impl Strategy<Value = AppStatus> {
    prop_oneof![
        Just(AppStatus::Loading),
        problem().prop_map(AppStatus::error),
        prop::collection::vec(field(), 0..6).prop_map(|data| AppStatus::ok(data)),
    ]
}

proptest! {
    /// Fields read back unchanged after construction.
    #[test]
    fn delivered_fields_read_back(date in field(), recipient in field()) {
        let status = DeliveryStatus::delivered(date.clone(), recipient.clone());
        prop_assert_eq!(status.delivery(), Some((date.as_str(), recipient.as_str())));
    }

    #[test]
    fn ok_data_reads_back_in_order(data in prop::collection::vec(field(), 0..8)) {
        let status = AppStatus::ok(data.clone());
        prop_assert_eq!(status.data(), Some(data.as_slice()));
    }

    /// Independently built values with identical fields are equal.
    #[test]
    fn same_variant_same_fields_equal(sender in field()) {
        prop_assert_eq!(
            DeliveryStatus::pending(sender.clone()),
            DeliveryStatus::pending(sender)
        );
    }

    /// Values of different variants never compare equal.
    #[test]
    fn different_variants_never_equal(a in delivery(), b in delivery()) {
        if a.variant() != b.variant() {
            prop_assert_ne!(a, b);
        }
    }

    /// The description is non-empty, stable, and mentions every field.
    #[test]
    fn delivery_description_mentions_fields(status in delivery()) {
        let description = classify(&status);
        prop_assert!(!description.is_empty());
        prop_assert_eq!(&description, &classify(&status.clone()));
        let fields: Vec<&str> = match &status {
            DeliveryStatus::Pending { sender } => vec![sender.as_str()],
            DeliveryStatus::InTransit { estimated_delivery_date } => {
                vec![estimated_delivery_date.as_str()]
            }
            DeliveryStatus::Delivered { delivery_date, recipient } => {
                vec![delivery_date.as_str(), recipient.as_str()]
            }
            DeliveryStatus::Canceled { reason } => vec![reason.as_str()],
        };
        for value in fields {
            prop_assert!(description.contains(value), "{} missing from {}", value, description);
        }
    }

    #[test]
    fn app_description_is_stable(status in app()) {
        let description = classify_app(&status);
        prop_assert!(!description.is_empty());
        prop_assert_eq!(description, status.to_string());
    }

    /// The registry index always points at the reported variant name.
    #[test]
    fn variant_index_matches_registry(status in app()) {
        prop_assert_eq!(AppStatus::VARIANTS[status.variant_index()], status.variant());
    }
}
