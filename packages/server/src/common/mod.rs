// Common types and utilities shared across the application

pub mod coerce;
pub mod errors;
pub mod vin;

pub use errors::{BuyerError, BuyerResult};
pub use vin::normalize_vin;
