use serde::{Deserialize, Serialize};

use crate::facet::FacetValue;
use crate::types::identifiers::CatalogEntryId;
use crate::view::{SortKey, Tab};

/// Input from a browse screen control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// A facet control picked a value. Engages the facet filters.
    FacetChanged { change: FacetValue },
    FiltersOpened,
    /// Back to the default selection with facet filters disengaged.
    FiltersReset,
    QueryChanged { query: String },
    SortChanged { sort_key: SortKey },
    TabChanged { tab: Tab },
    ToggleSaved { id: CatalogEntryId },
}
