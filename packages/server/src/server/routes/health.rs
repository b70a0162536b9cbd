use std::time::Duration;

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::kernel::StorageKind;
use crate::server::app::AxumAppState;

const PING_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
pub struct HealthResponse {
    ok: bool,
    storage: StorageKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Liveness probe
///
/// Pings the storage backend. Returns 200 OK when it answers within five
/// seconds, 503 Service Unavailable otherwise.
pub async fn health_handler(
    Extension(state): Extension<AxumAppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let store = &state.deps.store;

    let error = match tokio::time::timeout(PING_TIMEOUT, store.ping()).await {
        Ok(Ok(())) => None,
        Ok(Err(e)) => Some(format!("Ping failed: {}", e)),
        Err(_) => Some("Ping timeout (>5s)".to_string()),
    };

    let status_code = if error.is_none() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            ok: error.is_none(),
            storage: store.kind(),
            error,
        }),
    )
}
