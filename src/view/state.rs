use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::facet::FacetSelection;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown tab: {0}")]
    UnknownTab(String),
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    All,
    Saved,
    Enrolled,
    Ongoing,
    Completed,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::All, Tab::Saved, Tab::Enrolled, Tab::Ongoing, Tab::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::All => "All",
            Tab::Saved => "Saved",
            Tab::Enrolled => "Enrolled",
            Tab::Ongoing => "Ongoing",
            Tab::Completed => "Completed",
        }
    }

    /// Status value an entry must carry to appear under this tab.
    pub fn required_status(self) -> Option<&'static str> {
        match self {
            Tab::Enrolled | Tab::Ongoing | Tab::Completed => Some(self.as_str()),
            Tab::All | Tab::Saved => None,
        }
    }

    /// Tab opened by a `?filter=` deep link. Only `saved` selects a tab;
    /// anything else, or no parameter, opens `All`.
    pub fn from_query_param(param: Option<&str>) -> Tab {
        match param {
            Some(p) if p.eq_ignore_ascii_case("saved") => Tab::Saved,
            _ => Tab::All,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownTab(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Catalog order, which is popularity order.
    #[default]
    Popular,
    /// Highest rating first; equal ratings keep catalog order.
    Rating,
    /// Same as `Popular` until entries carry a recency field.
    Newest,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Popular, SortKey::Rating, SortKey::Newest];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Popular => "Popular",
            SortKey::Rating => "Rating",
            SortKey::Newest => "Newest",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownSortKey(s.to_string()))
    }
}

/// Everything that decides what the browse screen shows.
///
/// Owned by the caller; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub active_tab: Tab,
    pub query: String,
    pub sort_key: SortKey,
    pub facets: FacetSelection,
    /// False until the filter panel is opened. While false the facet
    /// selection is ignored.
    pub facets_engaged: bool,
}

impl ViewState {
    pub fn new(active_tab: Tab) -> Self {
        Self {
            active_tab,
            ..Self::default()
        }
    }
}
