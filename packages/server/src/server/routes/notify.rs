use axum::{extract::rejection::JsonRejection, extract::Extension, Json};

use crate::domains::notifications::actions::notify_vins;
use crate::domains::notifications::{NotifyRequest, NotifyResponse};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

/// POST /notify - record a notification per VIN (stub channel)
pub async fn notify_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<Vec<NotifyRequest>>, JsonRejection>,
) -> Result<Json<Vec<NotifyResponse>>, ApiError> {
    let Json(requests) = payload?;
    let acknowledgements = notify_vins(requests, &state.deps).await?;
    Ok(Json(acknowledgements))
}
