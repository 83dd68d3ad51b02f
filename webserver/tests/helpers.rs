//! Test helpers for webserver tests

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;
use tracker::services::InMemoryStore;
use tracker::{CheckInEngine, GoalEvaluator, StateStore};
use webserver::WebServer;

pub const TEST_KEY: &str = "webserver_test_state";

/// Create test bind address
pub fn create_test_address() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
}

/// Webserver over a fresh in-memory medium
pub fn create_test_webserver(goal: Option<u64>) -> (WebServer<Arc<InMemoryStore>>, Arc<InMemoryStore>) {
    let medium = Arc::new(InMemoryStore::new());
    let store = StateStore::new(medium.clone(), TEST_KEY);
    let engine = match goal {
        Some(goal) => CheckInEngine::with_evaluator(store, GoalEvaluator::new(goal)),
        None => CheckInEngine::new(store),
    };
    (WebServer::new(create_test_address(), engine), medium)
}

/// Send a request through the router and decode the JSON body
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

pub async fn post_check_in(router: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/check-in")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}
