use tracing::{debug, info};

use crate::common::{BuyerError, BuyerResult};
use crate::domains::listings::actions::normalize::{normalize_listing, NormalizedListing};
use crate::domains::listings::data::{ListingData, RawListing};
use crate::kernel::ServerDeps;

/// Normalize and store a batch of raw listings.
///
/// The whole batch is validated before anything is written: one bad item
/// fails the request and nothing is stored. Each item then upserts its
/// vehicle and appends a listing row, so re-ingesting a VIN adds a listing
/// but never a second vehicle.
pub async fn ingest_listings(
    raw_listings: Vec<RawListing>,
    deps: &ServerDeps,
) -> BuyerResult<Vec<ListingData>> {
    let normalized = raw_listings
        .iter()
        .enumerate()
        .map(|(index, raw)| normalize_listing(raw).map_err(|e| e.at_index(index)))
        .collect::<BuyerResult<Vec<NormalizedListing>>>()?;

    info!(count = normalized.len(), "Ingesting listings");

    let mut stored = Vec::with_capacity(normalized.len());
    for NormalizedListing { vehicle, listing } in normalized {
        let vehicle = deps.store.upsert_vehicle(&vehicle).await?;
        let listing = deps.store.insert_listing(listing).await?;
        debug!(vin = %listing.vin, listing_id = listing.id, "Listing stored");
        stored.push(ListingData::from_parts(listing, &vehicle));
    }

    Ok(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::scoring::Scorer;
    use crate::kernel::{MemoryStore, StubNotifier};
    use serde_json::json;
    use std::sync::Arc;

    fn deps(store: Arc<MemoryStore>) -> ServerDeps {
        ServerDeps::new(store, Arc::new(StubNotifier::new()), Scorer::new(2024), false)
    }

    fn raw(value: serde_json::Value) -> RawListing {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn same_listing_twice_adds_rows_not_vehicles() {
        let store = Arc::new(MemoryStore::new());
        let deps = deps(store.clone());
        let body = json!({"vin": "1HGCM82633A004352", "price": 18950, "year": 2019});

        ingest_listings(vec![raw(body.clone())], &deps).await.unwrap();
        ingest_listings(vec![raw(body)], &deps).await.unwrap();

        assert_eq!(store.listing_count(), 2);
        assert_eq!(store.vehicle_count(), 1);
    }

    #[tokio::test]
    async fn invalid_item_rejects_whole_batch() {
        let store = Arc::new(MemoryStore::new());
        let deps = deps(store.clone());

        let err = ingest_listings(
            vec![
                raw(json!({"vin": "GOOD1", "price": 1000})),
                raw(json!({"price": 1000})),
            ],
            &deps,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, BuyerError::Validation(_)));
        assert!(err.to_string().contains("item 1"));
        assert_eq!(store.listing_count(), 0);
        assert_eq!(store.vehicle_count(), 0);
    }

    #[tokio::test]
    async fn returns_stored_listing_with_vehicle_fields() {
        let store = Arc::new(MemoryStore::new());
        let deps = deps(store);

        let stored = ingest_listings(
            vec![raw(json!({
                "vin": "abc123",
                "price": 9500,
                "make": "Ford",
                "model": "Focus",
                "year": 2016
            }))],
            &deps,
        )
        .await
        .unwrap();

        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].vin, "ABC123");
        assert_eq!(stored[0].make, "Ford");
        assert_eq!(stored[0].year, 2016);
        assert!(stored[0].score.is_none());
        assert!(stored[0].id > 0);
    }

    #[tokio::test]
    async fn empty_batch_is_a_no_op() {
        let store = Arc::new(MemoryStore::new());
        let deps = deps(store.clone());

        let stored = ingest_listings(Vec::new(), &deps).await.unwrap();
        assert!(stored.is_empty());
        assert_eq!(store.listing_count(), 0);
    }
}
