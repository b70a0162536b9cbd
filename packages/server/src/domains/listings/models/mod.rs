pub mod listing;

pub use listing::{CreateListing, Listing, ListingWithScore};
