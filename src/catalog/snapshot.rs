// Read-only snapshot:
// validated once at construction
// no mutation after that
// versioned by content hash

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;

use crate::catalog::entry::CatalogEntry;
use crate::types::identifiers::{CatalogEntryId, CatalogVersion};

pub const MAX_RATING: f32 = 5.0;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Duplicate catalog entry ID: {0}")]
    DuplicateEntryId(String),
    #[error("Rating {rating} of entry {id} is outside [0, 5]")]
    RatingOutOfRange { id: String, rating: f32 },
}

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    version: CatalogVersion,
}

impl Catalog {
    /// Validate `entries` and freeze them into a snapshot.
    ///
    /// Entry order is kept as given; it is the catalog's popularity order.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateEntryId(entry.id.as_str().to_string()));
            }

            if !entry.rating.is_finite() || !(0.0..=MAX_RATING).contains(&entry.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    id: entry.id.as_str().to_string(),
                    rating: entry.rating,
                });
            }
        }

        let canonical = serde_json::to_vec(&entries)?;
        let version = CatalogVersion::from_content(&canonical);

        Ok(Self { entries, version })
    }

    /// Load a JSON array of entries.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_reader(reader)?;
        let catalog = Self::new(entries)?;

        tracing::info!(
            entries = catalog.len(),
            version = %catalog.version,
            "Loaded catalog snapshot"
        );
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let f = File::open(path)?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn version(&self) -> &CatalogVersion {
        &self.version
    }

    pub fn get(&self, id: &CatalogEntryId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn contains(&self, id: &CatalogEntryId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
