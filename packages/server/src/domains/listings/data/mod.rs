pub mod listing;
pub mod raw_listing;

pub use listing::ListingData;
pub use raw_listing::RawListing;
