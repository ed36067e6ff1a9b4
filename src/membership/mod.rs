pub mod wishlist;

pub use wishlist::{toggle, Wishlist};
