pub mod events;

use crate::catalog::{Catalog, CatalogEntry};
use crate::engine::{FilterEngine, FilterOutcome};
use crate::facet::{domain_of, resolve, Facet, FacetDomain, FacetSelection};
use crate::membership::Wishlist;
use crate::types::identifiers::CatalogEntryId;
use crate::view::{Tab, ViewState};
pub use events::UiEvent;

/// One browse screen bound to a catalog snapshot.
///
/// Holds the only mutable state: the view and the wishlist. Every facet
/// change goes through [`resolve`]; everything else is last write wins.
pub struct BrowseSession<'c> {
    catalog: &'c Catalog,
    engine: FilterEngine,
    view: ViewState,
    wishlist: Wishlist,
}

impl<'c> BrowseSession<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_engine(catalog, FilterEngine::default())
    }

    pub fn with_engine(catalog: &'c Catalog, engine: FilterEngine) -> Self {
        Self {
            catalog,
            engine,
            view: ViewState::default(),
            wishlist: Wishlist::new(),
        }
    }

    /// Start on the tab named by a `?filter=` deep link.
    pub fn from_query_param(catalog: &'c Catalog, filter: Option<&str>) -> Self {
        let mut session = Self::new(catalog);
        session.view.active_tab = Tab::from_query_param(filter);
        session
    }

    /// Seed the saved entries, e.g. from the caller's own store.
    pub fn with_wishlist(mut self, wishlist: Wishlist) -> Self {
        self.wishlist = wishlist;
        self
    }

    pub fn dispatch(&mut self, event: UiEvent) -> &ViewState {
        match event {
            UiEvent::FacetChanged { change } => {
                self.view.facets = resolve(&self.view.facets, change);
                self.view.facets_engaged = true;
            }
            UiEvent::FiltersOpened => self.view.facets_engaged = true,
            UiEvent::FiltersReset => {
                self.view.facets = FacetSelection::default();
                self.view.facets_engaged = false;
            }
            UiEvent::QueryChanged { query } => self.view.query = query,
            UiEvent::SortChanged { sort_key } => self.view.sort_key = sort_key,
            UiEvent::TabChanged { tab } => self.view.active_tab = tab,
            UiEvent::ToggleSaved { id } => self.toggle_saved(&id),
        }
        &self.view
    }

    fn toggle_saved(&mut self, id: &CatalogEntryId) {
        if !self.catalog.contains(id) {
            tracing::warn!(%id, "Toggled wishlist id not present in catalog");
        }
        self.wishlist = self.wishlist.toggle(id);
    }

    /// Entries to display, in display order.
    pub fn visible(&self) -> Vec<&'c CatalogEntry> {
        self.outcome().entries
    }

    pub fn outcome(&self) -> FilterOutcome<'c> {
        self.engine
            .run(self.catalog.entries(), &self.view, &self.wishlist)
    }

    /// Values a facet control may offer right now.
    pub fn options(&self, facet: Facet) -> FacetDomain {
        domain_of(facet, &self.view.facets)
    }

    pub fn is_saved(&self, id: &CatalogEntryId) -> bool {
        self.wishlist.contains(id)
    }

    pub fn saved_count(&self) -> usize {
        self.wishlist.len()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }
}
