pub mod score_listings;

pub use score_listings::score_listings;
