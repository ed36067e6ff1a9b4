pub mod domain;
pub mod resolver;
pub mod selection;

pub use domain::{
    domain_of, is_topological, ClassDuration, ClassFormat, ClassMode, ClassSize, Facet,
    FacetDomain, FacetError, FacetValue, PaymentModel, RESOLUTION_ORDER,
};
pub use resolver::resolve;
pub use selection::FacetSelection;
