use std::cmp::Ordering;

use crate::catalog::CatalogEntry;
use crate::view::SortKey;

/// Order `entries` (given in catalog order) by `key`.
pub fn sort_entries(entries: &mut [&CatalogEntry], key: SortKey) {
    match key {
        // Catalog order is popularity order. No recency field exists yet, so
        // Newest keeps it too.
        SortKey::Popular | SortKey::Newest => {}
        SortKey::Rating => {
            // sort_by is stable: equal ratings keep catalog order.
            entries.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));

            debug_assert!(entries.windows(2).all(|w| w[0].rating >= w[1].rating));
        }
    }
}
