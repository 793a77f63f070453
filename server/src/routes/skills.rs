//! Skill endpoint routes, scoped by tenant.

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use roster_engine::{QueryParams, Skill, SkillId, SkillView, TenantId};

use crate::error::Result;
use crate::handlers::{
    handle_add, handle_delete, handle_get, handle_list, handle_table, handle_update,
    handle_validate, SaveResponse, SkillTableResponse, ValidationReport,
};
use crate::AppState;

/// Create skill routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/rest/tenant/{tenant_id}/skill/", get(list_handler))
        .route("/rest/tenant/{tenant_id}/skill/table", get(table_handler))
        .route("/rest/tenant/{tenant_id}/skill/validate", post(validate_handler))
        .route("/rest/tenant/{tenant_id}/skill/add", post(add_handler))
        .route("/rest/tenant/{tenant_id}/skill/update", put(update_handler))
        .route(
            "/rest/tenant/{tenant_id}/skill/{id}",
            get(get_handler).delete(delete_handler),
        )
}

/// GET /rest/tenant/{tenant_id}/skill/ - All skills of the tenant.
async fn list_handler(
    State(state): State<AppState>,
    Path(tenant_id): Path<TenantId>,
) -> Json<Vec<Skill>> {
    Json(handle_list(&state.store, tenant_id))
}

/// GET /rest/tenant/{tenant_id}/skill/{id} - One skill.
async fn get_handler(
    State(state): State<AppState>,
    Path((tenant_id, id)): Path<(TenantId, SkillId)>,
) -> Result<Json<Skill>> {
    Ok(Json(handle_get(&state.store, tenant_id, id)?))
}

/// GET /rest/tenant/{tenant_id}/skill/table - One page of the skills table.
async fn table_handler(
    State(state): State<AppState>,
    Path(tenant_id): Path<TenantId>,
    RawQuery(raw): RawQuery,
) -> Json<SkillTableResponse> {
    let query = QueryParams::parse(raw.as_deref().unwrap_or_default());
    Json(handle_table(&state.store, &state.table, tenant_id, &query))
}

/// POST /rest/tenant/{tenant_id}/skill/validate - Check a candidate skill.
async fn validate_handler(
    State(state): State<AppState>,
    Path(tenant_id): Path<TenantId>,
    Json(candidate): Json<Skill>,
) -> Result<Json<ValidationReport>> {
    Ok(Json(handle_validate(&state.store, tenant_id, &candidate)?))
}

/// POST /rest/tenant/{tenant_id}/skill/add - Save a new skill row.
async fn add_handler(
    State(state): State<AppState>,
    Path(tenant_id): Path<TenantId>,
    Json(view): Json<SkillView>,
) -> Result<(StatusCode, Json<SaveResponse>)> {
    let response = handle_add(&state.store, &state.commands, tenant_id, view)?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

/// PUT /rest/tenant/{tenant_id}/skill/update - Save an edited skill row.
async fn update_handler(
    State(state): State<AppState>,
    Path(tenant_id): Path<TenantId>,
    Json(skill): Json<Skill>,
) -> Result<(StatusCode, Json<SaveResponse>)> {
    let response = handle_update(&state.store, &state.commands, tenant_id, skill)?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

/// DELETE /rest/tenant/{tenant_id}/skill/{id} - Delete a skill row.
async fn delete_handler(
    State(state): State<AppState>,
    Path((tenant_id, id)): Path<(TenantId, SkillId)>,
) -> Result<Json<bool>> {
    Ok(Json(handle_delete(&state.store, &state.commands, tenant_id, id)?))
}
