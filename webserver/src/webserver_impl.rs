//! Main webserver implementation
//!
//! Wires the check-in engine into an Axum router. The durable medium is
//! injected through the engine, so tests run the same router over an
//! in-memory store.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    response::Json,
    routing::{get, post},
};
use serde_json::json;
use shared::{ProcessId, process_info};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracker::{CheckInEngine, DashboardView, KeyValueStore};

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::types::{CheckInRequest, CheckInResponse};

/// Main webserver struct with dependency injection
pub struct WebServer<K: KeyValueStore> {
    state: Arc<WebServerState<K>>,
}

impl<K: KeyValueStore> Clone for WebServer<K> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<K> WebServer<K>
where
    K: KeyValueStore + 'static,
{
    /// Create a new webserver around an engine whose state is already loaded
    pub fn new(bind_address: SocketAddr, engine: CheckInEngine<K>) -> Self {
        Self {
            state: Arc::new(WebServerState::new(bind_address, engine)),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/api/state", get(state_handler::<K>))
            .route("/api/check-in", post(check_in_handler::<K>))
            .route("/api/status", get(status_handler::<K>))
            .route("/health", get(health_check))
            .layer(
                ServiceBuilder::new()
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve until Ctrl+C
    pub async fn run(&self) -> WebServerResult<()> {
        let router = self.build_router();
        let addr = self.state.bind_address;

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {addr}: {e}")))?;

        process_info!(ProcessId::current(), "🌐 Web server listening on http://{}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                shared::logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal");
            })
            .await?;

        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState<K>> {
        &self.state
    }
}

// HTTP Handlers

/// Dashboard read model: counts, progress and attendee list
async fn state_handler<K>(State(webserver): State<WebServer<K>>) -> Json<DashboardView>
where
    K: KeyValueStore + 'static,
{
    let engine = webserver.state.engine.lock().await;
    Json(DashboardView::from_state(engine.state(), engine.goal()))
}

/// Apply one check-in from the form
async fn check_in_handler<K>(
    State(webserver): State<WebServer<K>>,
    payload: Result<Json<CheckInRequest>, JsonRejection>,
) -> WebServerResult<Json<CheckInResponse>>
where
    K: KeyValueStore + 'static,
{
    let Json(request) = payload.map_err(|e| WebServerError::InvalidRequest {
        details: e.body_text(),
    })?;

    let name = request.name.unwrap_or_default();
    let team = request.team.unwrap_or_default();

    let receipt = {
        let mut engine = webserver.state.engine.lock().await;
        engine.check_in(&name, &team)?
    };

    Ok(Json(CheckInResponse::from(receipt)))
}

/// Server status
async fn status_handler<K>(State(webserver): State<WebServer<K>>) -> Json<serde_json::Value>
where
    K: KeyValueStore + 'static,
{
    let engine = webserver.state.engine.lock().await;
    Json(json!({
        "status": "running",
        "uptime_seconds": webserver.state.get_uptime_seconds(),
        "total": engine.state().total(),
        "goal": engine.goal(),
        "storage_key": engine.store().key(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Health check endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().timestamp()
    }))
}
