//! HTTP API for triggering scans and browsing history

use crate::error::Result;
use crate::models::ScanConfig;
use crate::scanner::ScanEngine;
use crate::storage::Store;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

/// Shared state for API handlers
pub struct AppState {
    pub engine: ScanEngine,
    pub scan_config: ScanConfig,
    pub store: Store,
}

/// Builds the API router
pub fn router(state: Arc<AppState>) -> Router {
    // Permissive CORS so a browser frontend on another port can call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/scan", post(run_scan))
        .route("/api/scans", get(scan_history))
        .layer(cors)
        .with_state(state)
}

/// Binds the listener and serves the API until shutdown
pub async fn serve(state: Arc<AppState>, bind_addr: &str) -> Result<()> {
    let listener = TcpListener::bind(bind_addr).await?;
    info!("VulnX API listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct ScanRequest {
    url: Option<String>,
}

/// Prepends `https://` when the target has no scheme
pub fn normalize_target(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

async fn run_scan(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScanRequest>,
) -> impl IntoResponse {
    let target = match request.url.as_deref().filter(|u| !u.is_empty()) {
        Some(url) => normalize_target(url),
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "URL is required"})),
            )
                .into_response();
        }
    };

    info!("Starting basic scan on {target}");
    let config = ScanConfig {
        target: target.clone(),
        ..state.scan_config.clone()
    };

    match state.engine.scan(&config).await {
        Ok(findings) => {
            info!("Found {} vulnerabilities", findings.len());
            // History is best-effort; a storage hiccup must not fail the scan
            if let Err(e) = state.store.record_scan(&target, "basic", &findings).await {
                warn!("Failed to record scan history: {e}");
            }
            (StatusCode::OK, Json(json!({"vulnerabilities": findings}))).into_response()
        }
        Err(e) => {
            error!("Scan failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

async fn scan_history(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.recent_scans(50).await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}
