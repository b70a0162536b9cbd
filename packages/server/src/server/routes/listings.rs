use axum::{extract::Extension, Json};

use crate::domains::listings::actions::list_listings;
use crate::domains::listings::ListingData;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

/// GET /listings - listings joined with their current score
pub async fn listings_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<Vec<ListingData>>, ApiError> {
    let listings = list_listings(&state.deps).await?;
    Ok(Json(listings))
}
