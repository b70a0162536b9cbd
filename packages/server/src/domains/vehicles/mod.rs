//! Vehicles domain - one row per VIN, upserted on ingest

pub mod models;

pub use models::Vehicle;
