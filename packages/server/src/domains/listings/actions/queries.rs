use crate::common::BuyerResult;
use crate::domains::listings::data::ListingData;
use crate::kernel::ServerDeps;

/// Every stored listing with vehicle attributes and current score, newest first
pub async fn list_listings(deps: &ServerDeps) -> BuyerResult<Vec<ListingData>> {
    let rows = deps.store.list_listings_with_scores().await?;
    Ok(rows.into_iter().map(ListingData::from).collect())
}
