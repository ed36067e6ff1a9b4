use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;
use crate::membership::Wishlist;
use crate::view::{Tab, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateKind {
    Tab,
    Facets,
    Text,
}

impl PredicateKind {
    pub const ALL: [PredicateKind; 3] = [PredicateKind::Tab, PredicateKind::Facets, PredicateKind::Text];

    pub fn as_str(self) -> &'static str {
        match self {
            PredicateKind::Tab => "tab",
            PredicateKind::Facets => "facets",
            PredicateKind::Text => "text",
        }
    }
}

impl fmt::Display for PredicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The predicates of one `apply` call, prepared once for the whole catalog.
pub(crate) struct Predicates<'v> {
    view: &'v ViewState,
    wishlist: &'v Wishlist,
    /// Lowercased query; `None` when the query is empty.
    needle: Option<String>,
}

impl<'v> Predicates<'v> {
    pub(crate) fn new(view: &'v ViewState, wishlist: &'v Wishlist) -> Self {
        let needle = (!view.query.is_empty()).then(|| view.query.to_lowercase());
        Self {
            view,
            wishlist,
            needle,
        }
    }

    /// Whether `entry` passes predicate `kind`. Inactive predicates pass
    /// everything.
    pub(crate) fn matches(&self, kind: PredicateKind, entry: &CatalogEntry) -> bool {
        match kind {
            PredicateKind::Tab => self.matches_tab(entry),
            PredicateKind::Facets => self.matches_facets(entry),
            PredicateKind::Text => self.matches_text(entry),
        }
    }

    fn matches_tab(&self, entry: &CatalogEntry) -> bool {
        match self.view.active_tab {
            Tab::All => true,
            Tab::Saved => self.wishlist.contains(&entry.id),
            tab => tab
                .required_status()
                .map_or(true, |status| entry.has_status(status)),
        }
    }

    // Duration and payment model are not matched: entries do not reliably
    // carry them.
    fn matches_facets(&self, entry: &CatalogEntry) -> bool {
        if !self.view.facets_engaged {
            return true;
        }
        let facets = &self.view.facets;
        entry.mode == facets.mode() && entry.format == facets.format() && entry.size == facets.size()
    }

    fn matches_text(&self, entry: &CatalogEntry) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => {
                entry.title.to_lowercase().contains(needle.as_str())
                    || entry.tutor_name.to_lowercase().contains(needle.as_str())
            }
        }
    }
}
