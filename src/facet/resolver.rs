use super::domain::{domain_of, is_topological, FacetValue, RESOLUTION_ORDER};
use super::selection::FacetSelection;

/// Apply `change` to `selection` and reconcile every dependent facet.
///
/// A change whose value lies outside its facet's current domain (for example
/// `format=Outbound` while `mode=Online`) is rejected and `selection` comes
/// back unchanged. Otherwise the value is assigned, then each facet is
/// checked in resolution order and a value that left its domain is replaced
/// with the domain's canonical default.
///
/// `selection` must be consistent on entry; the result always is.
pub fn resolve(selection: &FacetSelection, change: FacetValue) -> FacetSelection {
    debug_assert!(is_topological(&RESOLUTION_ORDER));
    debug_assert!(selection.is_consistent());

    let facet = change.facet();
    // The changed facet's domain is fixed by its upstream facets, which this
    // change does not touch.
    if !domain_of(facet, selection).contains(&change) {
        tracing::debug!(%change, "Rejected facet change outside current domain");
        return *selection;
    }

    let mut next = *selection;
    next.assign(change);

    for downstream in RESOLUTION_ORDER {
        let current = next.get(downstream);
        let domain = domain_of(downstream, &next);
        if domain.contains(&current) {
            continue;
        }

        if let Some(default) = domain.canonical_default() {
            tracing::debug!(
                facet = %downstream,
                stale = current.as_str(),
                reset_to = default.as_str(),
                cause = %change,
                "Reset stale facet to canonical default"
            );
            next.assign(default);
        }
    }

    debug_assert!(next.is_consistent());
    next
}
