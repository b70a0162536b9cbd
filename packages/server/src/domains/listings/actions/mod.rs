//! Listing actions
//!
//! Actions return plain data. HTTP routes call them with `ServerDeps`.

pub mod ingest;
pub mod normalize;
pub mod queries;

pub use ingest::ingest_listings;
pub use normalize::{normalize_listing, NormalizedListing};
pub use queries::list_listings;
