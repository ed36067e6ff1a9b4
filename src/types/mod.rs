pub mod identifiers;

pub use identifiers::{CatalogEntryId, CatalogVersion};
