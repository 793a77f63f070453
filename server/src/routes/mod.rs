//! HTTP route definitions.

mod admin;
mod health;
mod skills;

use crate::AppState;
use axum::Router;

/// Create all application routes.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(admin::routes())
        .merge(skills::routes())
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::{app, AppState};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_app() -> (AppState, Router) {
        let config = Config {
            seed_skills: vec!["Nurse".into(), "Doctor".into(), "Cook".into()],
            ..Config::default()
        };
        let state = AppState::new(config);
        (state.clone(), app(state))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn wait_for_len(state: &AppState, expected: usize) {
        for _ in 0..100 {
            if state.store.len() == expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("store never reached {expected} skills");
    }

    #[tokio::test]
    async fn health() {
        let (_, app) = test_app();
        let (status, body) = send(&app, "GET", "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["defaultTenantId"], 1);
    }

    #[tokio::test]
    async fn list_and_get() {
        let (_, app) = test_app();

        let (status, body) = send(&app, "GET", "/rest/tenant/1/skill/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);

        let (status, body) = send(&app, "GET", "/rest/tenant/1/skill/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": 2, "tenantId": 1, "name": "Doctor"}));
    }

    #[tokio::test]
    async fn get_errors_use_store_messages() {
        let (_, app) = test_app();

        let (status, body) = send(&app, "GET", "/rest/tenant/1/skill/0", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No Skill entity found with ID (0).");

        let (status, body) = send(&app, "GET", "/rest/tenant/0/skill/1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "The tenantId (0) does not match the persistable (Nurse)'s tenantId (1)."
        );
    }

    #[tokio::test]
    async fn table_sorted_descending() {
        let (_, app) = test_app();
        let (status, body) = send(
            &app,
            "GET",
            "/rest/tenant/1/skill/table?asc=false&itemsPerPage=2&view=compact",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Nurse", "Doctor"]);
        assert_eq!(body["totalPages"], 2);
        assert_eq!(body["columns"][0]["sort"], "descending");

        let next = body["links"]["next"].as_str().unwrap();
        assert!(next.contains("page=2"));
        assert!(next.contains("view=compact"));
    }

    #[tokio::test]
    async fn validate_candidate() {
        let (_, app) = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/rest/tenant/1/skill/validate",
            Some(json!({"tenantId": 1, "name": "Cook"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isValid"], false);
        assert_eq!(body["failingRules"], json!(["nameAlreadyTaken"]));
        assert_eq!(
            body["messages"],
            json!(["Name (Cook) is already taken by another skill"])
        );
    }

    #[tokio::test]
    async fn add_update_delete() {
        let (state, app) = test_app();

        let (status, body) = send(
            &app,
            "POST",
            "/rest/tenant/1/skill/add",
            Some(json!({"tenantId": 1, "name": "Driver"})),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body, json!({"committed": true}));
        wait_for_len(&state, 4).await;

        let (status, _) = send(
            &app,
            "PUT",
            "/rest/tenant/1/skill/update",
            Some(json!({"id": 4, "tenantId": 1, "name": "Chauffeur"})),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);

        let (status, body) = send(&app, "DELETE", "/rest/tenant/1/skill/3", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(true));
        wait_for_len(&state, 3).await;

        let (_, body) = send(&app, "DELETE", "/rest/tenant/1/skill/3", None).await;
        assert_eq!(body, json!(false));

        let names: Vec<_> = state.store.list(1).into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Nurse", "Doctor", "Chauffeur"]);
    }

    #[tokio::test]
    async fn reset_restores_seeded_skills() {
        let (state, app) = test_app();

        send(
            &app,
            "POST",
            "/rest/tenant/1/skill/add",
            Some(json!({"tenantId": 1, "name": "Driver"})),
        )
        .await;
        send(
            &app,
            "POST",
            "/rest/tenant/2/skill/add",
            Some(json!({"tenantId": 2, "name": "Porter"})),
        )
        .await;
        wait_for_len(&state, 5).await;

        let request = Request::builder()
            .method("POST")
            .uri("/rest/admin/reset")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let (_, body) = send(&app, "GET", "/rest/tenant/1/skill/", None).await;
        assert_eq!(
            body,
            json!([
                {"id": 1, "tenantId": 1, "name": "Nurse"},
                {"id": 2, "tenantId": 1, "name": "Doctor"},
                {"id": 3, "tenantId": 1, "name": "Cook"},
            ])
        );
        assert!(state.store.list(2).is_empty());
    }

    #[tokio::test]
    async fn validate_rejects_other_tenant() {
        let (_, app) = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/rest/tenant/1/skill/validate",
            Some(json!({"tenantId": 2, "name": "Cook"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "The tenantId (1) does not match the persistable (Cook)'s tenantId (2)."
        );
    }

    #[tokio::test]
    async fn invalid_add_is_unprocessable() {
        let (state, app) = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/rest/tenant/1/skill/add",
            Some(json!({"tenantId": 1, "name": ""})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["messages"], json!(["Skill cannot have an empty name"]));
        assert_eq!(state.store.len(), 3);
    }
}
