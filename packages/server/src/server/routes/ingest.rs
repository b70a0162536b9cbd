use axum::{extract::rejection::JsonRejection, extract::Extension, http::StatusCode, Json};

use crate::domains::listings::actions::ingest_listings;
use crate::domains::listings::{ListingData, RawListing};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

/// POST /ingest - normalize and store raw listings
pub async fn ingest_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<Vec<RawListing>>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<ListingData>>), ApiError> {
    let Json(raw_listings) = payload?;
    let stored = ingest_listings(raw_listings, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}
