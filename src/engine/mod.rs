pub mod config;
pub mod predicates;
pub mod sorting;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;
use crate::membership::Wishlist;
use crate::view::{SortKey, Tab, ViewState};
pub use config::{ConfigError, FilterConfig};
pub use predicates::PredicateKind;
use predicates::Predicates;
pub use sorting::sort_entries;

/// Counts describing one filter run.
///
/// Exclusions are attributed to the first predicate that rejected an entry
/// in evaluation order, so they depend on [`FilterConfig::predicate_order`].
/// `entries_matched` does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterMetadata {
    pub query: String,
    pub tab: Tab,
    pub sort_key: SortKey,
    pub facets_engaged: bool,

    pub entries_considered: usize,
    pub entries_matched: usize,

    pub excluded_by_tab: usize,
    pub excluded_by_facets: usize,
    pub excluded_by_text: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterOutcome<'a> {
    pub entries: Vec<&'a CatalogEntry>,
    pub metadata: FilterMetadata,
}

/// Stateless filter and sort pass over a catalog.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    config: FilterConfig,
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self {
            config: FilterConfig::v0(),
        }
    }
}

impl FilterEngine {
    pub fn new(config: FilterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn run<'a>(
        &self,
        catalog: &'a [CatalogEntry],
        view: &ViewState,
        wishlist: &Wishlist,
    ) -> FilterOutcome<'a> {
        let predicates = Predicates::new(view, wishlist);

        let mut excluded_by_tab = 0;
        let mut excluded_by_facets = 0;
        let mut excluded_by_text = 0;

        // 1. Filtering Phase
        let mut entries: Vec<&CatalogEntry> = Vec::with_capacity(catalog.len());
        for entry in catalog {
            let rejected_by = self
                .config
                .predicate_order
                .iter()
                .copied()
                .find(|kind| !predicates.matches(*kind, entry));

            match rejected_by {
                None => entries.push(entry),
                Some(PredicateKind::Tab) => excluded_by_tab += 1,
                Some(PredicateKind::Facets) => excluded_by_facets += 1,
                Some(PredicateKind::Text) => excluded_by_text += 1,
            }
        }

        // 2. Ordering Phase
        sort_entries(&mut entries, view.sort_key);

        let metadata = FilterMetadata {
            query: view.query.clone(),
            tab: view.active_tab,
            sort_key: view.sort_key,
            facets_engaged: view.facets_engaged,
            entries_considered: catalog.len(),
            entries_matched: entries.len(),
            excluded_by_tab,
            excluded_by_facets,
            excluded_by_text,
        };

        tracing::debug!(
            tab = %metadata.tab,
            sort_key = %metadata.sort_key,
            facets_engaged = metadata.facets_engaged,
            considered = metadata.entries_considered,
            matched = metadata.entries_matched,
            "Filtered catalog"
        );

        FilterOutcome { entries, metadata }
    }
}

/// Entries of `catalog` visible under `view`, in display order.
pub fn apply<'a>(
    catalog: &'a [CatalogEntry],
    view: &ViewState,
    wishlist: &Wishlist,
) -> Vec<&'a CatalogEntry> {
    FilterEngine::default().run(catalog, view, wishlist).entries
}
