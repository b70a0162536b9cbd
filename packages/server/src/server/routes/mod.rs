// HTTP routes
pub mod health;
pub mod ingest;
pub mod listings;
pub mod notify;
pub mod score;

pub use health::*;
pub use ingest::*;
pub use listings::*;
pub use notify::*;
pub use score::*;
