//! In-process API client driving the axum router without a socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use buyer_core::domains::scoring::Scorer;
use buyer_core::kernel::{MemoryStore, ServerDeps, StubNotifier};
use buyer_core::server::build_app;

/// Reference year used by every API test so scores stay fixed
pub const TEST_REFERENCE_YEAR: i32 = 2024;

/// Router backed by the in-memory store and stub notifier.
///
/// The concrete store and notifier are kept so tests can inspect what
/// the handlers wrote.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub notifier: Arc<StubNotifier>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build(false)
    }

    /// Same as `new`, but scoring rejects VINs that were never ingested
    pub fn strict() -> Self {
        Self::build(true)
    }

    fn build(strict_vins: bool) -> Self {
        init_tracing();

        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(StubNotifier::new());
        let deps = ServerDeps::new(
            store.clone(),
            notifier.clone(),
            Scorer::new(TEST_REFERENCE_YEAR),
            strict_vins,
        );
        let router = build_app(deps, &["http://localhost:3000".to_string()]);

        Self {
            router,
            store,
            notifier,
        }
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(path, body.to_string()).await
    }

    /// POST an arbitrary body, for malformed-JSON cases
    pub async fn post_raw(&self, path: &str, body: impl Into<String>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.into()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, body)
    }
}

/// Respect RUST_LOG in tests. Run with: RUST_LOG=debug cargo test -- --nocapture
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
