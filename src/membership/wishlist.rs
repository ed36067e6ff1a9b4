use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::CatalogEntryId;

/// Saved catalog entries. Membership is boolean; toggling flips it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    ids: BTreeSet<CatalogEntryId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this wishlist with `id` removed if present, added otherwise.
    #[must_use]
    pub fn toggle(&self, id: &CatalogEntryId) -> Wishlist {
        let mut ids = self.ids.clone();
        if !ids.remove(id) {
            ids.insert(id.clone());
        }
        Wishlist { ids }
    }

    pub fn contains(&self, id: &CatalogEntryId) -> bool {
        self.ids.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntryId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<CatalogEntryId> for Wishlist {
    fn from_iter<I: IntoIterator<Item = CatalogEntryId>>(iter: I) -> Self {
        Wishlist {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Free-function form of [`Wishlist::toggle`].
pub fn toggle(wishlist: &Wishlist, id: &CatalogEntryId) -> Wishlist {
    wishlist.toggle(id)
}
