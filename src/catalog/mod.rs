pub mod entry;
pub mod snapshot;

pub use crate::types::identifiers::{CatalogEntryId, CatalogVersion};
pub use entry::CatalogEntry;
pub use snapshot::{Catalog, CatalogError};
