//! Listings domain - ingest, normalization and the review table query

pub mod actions;
pub mod data;
pub mod models;

pub use data::{ListingData, RawListing};
pub use models::{CreateListing, Listing, ListingWithScore};
