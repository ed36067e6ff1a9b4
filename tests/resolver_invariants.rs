//! Property tests for the facet resolver.

use facet_core::facet::{
    domain_of, resolve, ClassDuration, ClassFormat, ClassMode, ClassSize, Facet, FacetSelection,
    FacetValue, PaymentModel,
};
use proptest::prelude::*;
use proptest::sample::select;

fn arb_change() -> impl Strategy<Value = FacetValue> {
    prop_oneof![
        select(ClassMode::ALL).prop_map(FacetValue::from),
        select(ClassFormat::ALL).prop_map(FacetValue::from),
        select(ClassSize::ALL).prop_map(FacetValue::from),
        select(ClassDuration::ALL).prop_map(FacetValue::from),
        select(PaymentModel::ALL).prop_map(FacetValue::from),
    ]
}

/// A selection reached from the default by a random walk of changes.
fn arb_selection() -> impl Strategy<Value = FacetSelection> {
    prop::collection::vec(arb_change(), 0..12).prop_map(|changes| {
        changes
            .into_iter()
            .fold(FacetSelection::default(), |s, c| resolve(&s, c))
    })
}

fn holds_invariants(s: &FacetSelection) -> bool {
    let format_ok = match s.mode() {
        ClassMode::Online => matches!(s.format(), ClassFormat::Live | ClassFormat::Recorded),
        ClassMode::Offline => matches!(s.format(), ClassFormat::Inbound | ClassFormat::Outbound),
    };
    let size_ok = s.format() != ClassFormat::Outbound || s.size() == ClassSize::OneOnOne;
    let payment_ok =
        s.duration() != ClassDuration::Infinite || s.payment_model() == PaymentModel::Subscription;
    format_ok && size_ok && payment_ok
}

/// Every combination of facet values that satisfies the dependency rules.
fn all_consistent_selections() -> Vec<FacetSelection> {
    let mut out = Vec::new();
    for &mode in ClassMode::ALL {
        for &format in ClassFormat::ALL {
            for &size in ClassSize::ALL {
                for &duration in ClassDuration::ALL {
                    for &payment in PaymentModel::ALL {
                        if let Ok(s) = FacetSelection::try_new(mode, format, size, duration, payment)
                        {
                            out.push(s);
                        }
                    }
                }
            }
        }
    }
    out
}

#[test]
fn try_new_accepts_exactly_the_consistent_combinations() {
    let selections = all_consistent_selections();
    // mode/format/size: 4 online + 3 offline (Outbound pins size).
    // duration/payment: 3 (Infinite pins payment).
    assert_eq!(selections.len(), 7 * 3);
    assert!(selections.iter().all(holds_invariants));
}

#[test]
fn every_consistent_selection_and_change_stays_consistent() {
    for start in all_consistent_selections() {
        for facet in Facet::ALL {
            for change in FacetValue::all_of(facet) {
                let next = resolve(&start, change);
                assert!(
                    holds_invariants(&next),
                    "{start:?} + {change} gave {next:?}"
                );
                assert_eq!(resolve(&next, change), next, "not idempotent for {change}");
            }
        }
    }
}

proptest! {
    /// INVARIANT: resolve never produces an inconsistent selection.
    #[test]
    fn resolve_preserves_invariants(start in arb_selection(), change in arb_change()) {
        let next = resolve(&start, change);
        prop_assert!(holds_invariants(&next));
        prop_assert!(next.is_consistent());
    }

    /// INVARIANT: applying the same change twice equals applying it once.
    #[test]
    fn resolve_is_idempotent(start in arb_selection(), change in arb_change()) {
        let once = resolve(&start, change);
        let twice = resolve(&once, change);
        prop_assert_eq!(once, twice);
    }

    /// INVARIANT: an accepted change is reflected in the result.
    #[test]
    fn accepted_change_is_kept(start in arb_selection(), change in arb_change()) {
        let next = resolve(&start, change);
        let accepted = domain_of(change.facet(), &start).contains(&change);
        prop_assert_eq!(next.get(change.facet()) == change, accepted);
    }

    /// INVARIANT: going offline keeps an offline format, otherwise picks Inbound.
    #[test]
    fn offline_canonical_default(start in arb_selection()) {
        let next = resolve(&start, ClassMode::Offline.into());
        let expected = match start.format() {
            ClassFormat::Inbound | ClassFormat::Outbound => start.format(),
            ClassFormat::Live | ClassFormat::Recorded => ClassFormat::Inbound,
        };
        prop_assert_eq!(next.format(), expected);
    }

    /// INVARIANT: facets unrelated to the change are left alone.
    #[test]
    fn duration_change_does_not_touch_mode_chain(start in arb_selection(), duration in select(ClassDuration::ALL)) {
        let next = resolve(&start, duration.into());
        prop_assert_eq!(next.mode(), start.mode());
        prop_assert_eq!(next.format(), start.format());
        prop_assert_eq!(next.size(), start.size());
    }
}
