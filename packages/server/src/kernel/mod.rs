// Infrastructure: storage backends, notifier, dependency container

pub mod deps;
pub mod memory_store;
pub mod notifier;
pub mod postgres_store;
pub mod traits;

pub use deps::ServerDeps;
pub use memory_store::MemoryStore;
pub use notifier::StubNotifier;
pub use postgres_store::PostgresStore;
pub use traits::*;
