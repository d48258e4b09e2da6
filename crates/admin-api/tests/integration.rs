//! Integration tests: list/filter, lifecycle commands, audit trail, persistence.

use admin_api::server::{self, AppState};
use admin_core::AdminService;
use admin_store::{InMemoryRecordStore, JsonFileRecordStore};
use admin_types::RecordStore;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use std::sync::Arc;
use tower::util::ServiceExt;

fn test_app() -> axum::Router {
    let store: Arc<dyn RecordStore + Send + Sync> = Arc::new(InMemoryRecordStore::new());
    app_with(store)
}

fn app_with(store: Arc<dyn RecordStore + Send + Sync>) -> axum::Router {
    let state = Arc::new(AppState {
        service: AdminService::new(store),
    });
    server::router(state)
}

async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> serde_json::Value {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn list_bootstraps_seed_and_is_stable() {
    let app = test_app();
    let first = send(&app, "GET", "/admin/users", None).await;
    assert_eq!(first["code"], 200);
    let users = first["data"].as_array().unwrap();
    assert_eq!(users.len(), 4);
    assert_eq!(users[0]["id"], "u-1001");
    assert_eq!(users[0]["type"], "developer");
    assert_eq!(users[0]["status"], "pending");

    let second = send(&app, "GET", "/admin/users", None).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn list_filters_compose_over_query_params() {
    let app = test_app();
    let j = send(&app, "GET", "/admin/users?type=developer&status=pending", None).await;
    let users = j["data"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], "u-1001");

    let j = send(&app, "GET", "/admin/users?q=OAKFIELD", None).await;
    let users = j["data"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], "u-1002");

    let j = send(&app, "GET", "/admin/users?type=investor&status=suspended", None).await;
    assert!(j["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn approve_updates_status_and_appends_audit() {
    let app = test_app();
    let j = send(&app, "POST", "/admin/users/u-1001/approve", None).await;
    assert_eq!(j["code"], 200);
    assert_eq!(j["data"]["status"], "approved");

    let j = send(&app, "GET", "/admin/users/u-1001", None).await;
    assert_eq!(j["data"]["status"], "approved");

    let j = send(&app, "GET", "/admin/audit", None).await;
    let entries = j["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["action"], "update_status");
    assert_eq!(entries[0]["actor"], "admin");
    assert_eq!(entries[0]["details"]["status"], "approved");
    assert_eq!(entries[0]["details"]["id"], "u-1001");
}

#[tokio::test]
async fn generic_status_endpoint_takes_actor() {
    let app = test_app();
    let j = send(
        &app,
        "POST",
        "/admin/users/u-1002/status",
        Some(json!({ "status": "suspended", "actor": "ops-lead" })),
    )
    .await;
    assert_eq!(j["data"]["status"], "suspended");

    let j = send(&app, "GET", "/admin/audit", None).await;
    assert_eq!(j["data"][0]["actor"], "ops-lead");
}

#[tokio::test]
async fn verify_promotes_pending_and_repeats_as_noop_on_status() {
    let app = test_app();
    let j = send(&app, "POST", "/admin/users/u-1004/verify", None).await;
    assert_eq!(j["code"], 200);
    assert_eq!(j["data"]["user"]["status"], "approved");
    assert_eq!(j["data"]["user"]["credentials"]["idVerified"], true);
    assert_eq!(j["data"]["audit"]["action"], "verify_credentials");

    let j = send(&app, "POST", "/admin/users/u-1004/verify", None).await;
    assert_eq!(j["data"]["user"]["status"], "approved");
    assert_eq!(j["data"]["user"]["credentials"]["idVerified"], true);

    let j = send(&app, "GET", "/admin/audit", None).await;
    assert_eq!(j["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn delete_is_soft_and_restore_reverses() {
    let app = test_app();
    let j = send(&app, "DELETE", "/admin/users/u-1002", None).await;
    assert_eq!(j["data"]["status"], "deleted");

    // record is still resolvable after deletion
    let j = send(&app, "GET", "/admin/users/u-1002", None).await;
    assert_eq!(j["code"], 200);
    assert_eq!(j["data"]["status"], "deleted");

    let j = send(&app, "POST", "/admin/users/u-1002/restore", None).await;
    assert_eq!(j["data"]["status"], "approved");

    let j = send(&app, "GET", "/admin/audit", None).await;
    let entries = j["data"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["action"], "restore_user");
    assert_eq!(entries[1]["action"], "delete_user");
}

#[tokio::test]
async fn unknown_id_is_404_and_leaves_collections_unchanged() {
    let app = test_app();
    let users_before = send(&app, "GET", "/admin/users", None).await;

    for (method, uri) in [
        ("POST", "/admin/users/ghost/approve"),
        ("POST", "/admin/users/ghost/verify"),
        ("DELETE", "/admin/users/ghost"),
        ("POST", "/admin/users/ghost/restore"),
    ] {
        let j = send(&app, method, uri, None).await;
        assert_eq!(j["code"], 404, "{method} {uri}");
        assert!(j["data"].is_null());
    }

    let j = send(&app, "GET", "/admin/users/ghost", None).await;
    assert_eq!(j["code"], 404);

    let users_after = send(&app, "GET", "/admin/users", None).await;
    assert_eq!(users_before, users_after);
    let j = send(&app, "GET", "/admin/audit", None).await;
    assert!(j["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn add_user_then_fetch_and_audit() {
    let app = test_app();
    let j = send(
        &app,
        "POST",
        "/admin/users",
        Some(json!({
            "name": "Dana Whitfield",
            "email": "dana@crestlinedev.com",
            "type": "developer",
            "docs": [{ "name": "Broker license", "url": "https://docs.example.com/dana/license.pdf" }]
        })),
    )
    .await;
    assert_eq!(j["code"], 200);
    let id = j["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(j["data"]["status"], "pending");
    assert_eq!(j["data"]["credentials"]["idVerified"], false);

    let j = send(&app, "GET", &format!("/admin/users/{id}"), None).await;
    assert_eq!(j["data"]["email"], "dana@crestlinedev.com");

    let j = send(&app, "GET", "/admin/users", None).await;
    assert_eq!(j["data"].as_array().unwrap().len(), 5);

    let j = send(&app, "GET", "/admin/audit", None).await;
    assert_eq!(j["data"][0]["action"], "create_user");
    assert_eq!(j["data"][0]["actor"], "system");
}

#[tokio::test]
async fn file_store_persists_across_router_instances() {
    let dir = tempfile::tempdir().unwrap();

    let app = app_with(Arc::new(JsonFileRecordStore::new(dir.path())));
    let j = send(&app, "POST", "/admin/users/u-1001/approve", None).await;
    assert_eq!(j["code"], 200);
    drop(app);

    // a fresh store over the same dir sees the committed snapshot
    let app = app_with(Arc::new(JsonFileRecordStore::new(dir.path())));
    let j = send(&app, "GET", "/admin/users/u-1001", None).await;
    assert_eq!(j["data"]["status"], "approved");
    let j = send(&app, "GET", "/admin/audit", None).await;
    assert_eq!(j["data"].as_array().unwrap().len(), 1);
    assert_eq!(j["data"][0]["action"], "update_status");
}

#[tokio::test]
async fn health_endpoint() {
    let app = test_app();
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"ok");
}
