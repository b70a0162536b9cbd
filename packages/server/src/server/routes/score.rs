use axum::{extract::rejection::JsonRejection, extract::Extension, Json};

use crate::domains::scoring::actions::score_listings;
use crate::domains::scoring::{ScoreRequest, ScoreResponse};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

/// POST /score - score listings and persist the results
pub async fn score_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<Vec<ScoreRequest>>, JsonRejection>,
) -> Result<Json<Vec<ScoreResponse>>, ApiError> {
    let Json(requests) = payload?;
    let scores = score_listings(requests, &state.deps).await?;
    Ok(Json(scores))
}
