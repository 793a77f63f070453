//! Admin routes.

use axum::{extract::State, http::StatusCode, routing::post, Router};

use crate::handlers::handle_reset;
use crate::AppState;

/// Create admin routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/rest/admin/reset", post(reset_handler))
}

/// POST /rest/admin/reset - Reset the application.
async fn reset_handler(State(state): State<AppState>) -> StatusCode {
    handle_reset(&state.store, &state.config);
    StatusCode::NO_CONTENT
}
