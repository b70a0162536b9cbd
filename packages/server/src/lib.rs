// Auto Buyer Demo - API Core
//
// Ingests vehicle listings, normalizes them, scores them with a small
// heuristic and serves the joined view to the buyer review table.
// Storage is injected at startup (PostgreSQL or in-memory).

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
