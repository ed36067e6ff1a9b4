pub mod state;

pub use state::{ParseError, SortKey, Tab, ViewState};
