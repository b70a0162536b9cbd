//! Server dependencies for request handlers (using traits for testability)
//!
//! Storage and notifier are chosen once at startup and shared by every request.

use std::sync::Arc;

use tracing::{info, warn};

use crate::common::BuyerError;
use crate::config::Config;
use crate::domains::scoring::Scorer;
use crate::kernel::{BaseListingStore, BaseNotifier, MemoryStore, PostgresStore, StubNotifier};

/// Server dependencies accessible to actions
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseListingStore>,
    pub notifier: Arc<dyn BaseNotifier>,
    pub scorer: Scorer,
    /// Reject scoring of VINs that were never ingested
    pub strict_vins: bool,
}

impl ServerDeps {
    pub fn new(
        store: Arc<dyn BaseListingStore>,
        notifier: Arc<dyn BaseNotifier>,
        scorer: Scorer,
        strict_vins: bool,
    ) -> Self {
        Self {
            store,
            notifier,
            scorer,
            strict_vins,
        }
    }

    /// Build dependencies from configuration.
    ///
    /// Uses PostgreSQL when `DATABASE_URL` is set and reachable; otherwise
    /// the in-memory store. An unreachable database never stops the process.
    pub async fn from_config(config: &Config) -> Self {
        let store = select_store(config.database_url.as_deref()).await;
        info!(storage = %store.kind(), "Storage backend selected");

        let scorer = Scorer::new(config.scoring_reference_year);
        info!(reference_year = scorer.reference_year(), "Scorer configured");

        Self::new(
            store,
            Arc::new(StubNotifier::new()),
            scorer,
            config.strict_vins,
        )
    }
}

async fn select_store(database_url: Option<&str>) -> Arc<dyn BaseListingStore> {
    let Some(url) = database_url else {
        info!("DATABASE_URL not set, using in-memory store");
        return Arc::new(MemoryStore::new());
    };

    match PostgresStore::connect(url).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            let error = BuyerError::StorageUnavailable(format!("{:#}", e));
            warn!(error = %error, "Falling back to in-memory store");
            Arc::new(MemoryStore::new())
        }
    }
}
