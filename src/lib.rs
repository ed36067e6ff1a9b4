//! Deterministic faceted filter engine for course and tutor catalogs.
//!
//! `facet-core` keeps the facet rules of a catalog browser in one place:
//! dependent facet domains, a pure resolver that reconciles stale selections,
//! a stateless filter and sort pass, and a saved-entries set. Identical
//! inputs always produce identical outputs.

pub mod catalog;
pub mod engine;
pub mod facet;
pub mod membership;
pub mod session;
pub mod types;
pub mod view;

pub use catalog::{Catalog, CatalogEntry, CatalogError};
pub use engine::{apply, FilterConfig, FilterEngine, FilterMetadata, FilterOutcome};
pub use facet::{domain_of, resolve, Facet, FacetSelection, FacetValue};
pub use membership::{toggle, Wishlist};
pub use session::{BrowseSession, UiEvent};
pub use types::{CatalogEntryId, CatalogVersion};
pub use view::{SortKey, Tab, ViewState};
