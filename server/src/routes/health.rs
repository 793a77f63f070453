//! Health check endpoint.

use axum::{extract::State, routing::get, Json, Router};
use roster_engine::TenantId;
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub default_tenant_id: TenantId,
}

/// Create health routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        default_tenant_id: state.config.default_tenant_id,
    })
}

/// Root handler.
async fn root() -> &'static str {
    "Roster Skills Server"
}
