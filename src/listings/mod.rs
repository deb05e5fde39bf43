//! In-memory property listings and the filter over them.

pub mod filter;
pub mod model;
pub mod store;

pub use filter::{ListingParams, ListingQuery, filter};
pub use model::{Listing, PropertyType};
pub use store::ListingStore;
