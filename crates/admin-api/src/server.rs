//! Axum router and handlers for the admin command surface.
//!
//! Responses carry the outcome in the envelope (`code` 404/500) while the
//! transport status stays 200, matching what the browser console expects.

use admin_core::AdminService;
use admin_types::{
    ActorRequest, AddUserRequest, AdminError, AuditLogResponse, BaseResponse, NewUser,
    StatusUpdateRequest, UserFilter, UserListResponse, UserResponse, UserStatus, VerifyResponse,
};
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub struct AppState {
    pub service: AdminService,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/admin/users", get(handle_list_users).post(handle_add_user))
        .route(
            "/admin/users/:id",
            get(handle_get_user).delete(handle_delete_user),
        )
        .route("/admin/users/:id/status", post(handle_update_status))
        .route("/admin/users/:id/approve", post(handle_approve))
        .route("/admin/users/:id/suspend", post(handle_suspend))
        .route("/admin/users/:id/verify", post(handle_verify))
        .route("/admin/users/:id/restore", post(handle_restore))
        .route("/admin/audit", get(handle_audit_log))
        .route("/health", get(handle_health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn ok<T>(data: T) -> Json<BaseResponse<T>> {
    Json(BaseResponse {
        code: 200,
        message: "Success".to_string(),
        data: Some(data),
    })
}

fn fail<T>(e: AdminError) -> Json<BaseResponse<T>> {
    let code = match e {
        AdminError::NotFound(_) => 404,
        AdminError::Store(_) => 500,
    };
    Json(BaseResponse {
        code,
        message: e.to_string(),
        data: None,
    })
}

fn actor_of(body: &Option<Json<ActorRequest>>) -> Option<&str> {
    body.as_ref().and_then(|b| b.actor.as_deref())
}

async fn handle_list_users(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<UserFilter>,
) -> Json<UserListResponse> {
    match state.service.list_users(&filter).await {
        Ok(users) => ok(users),
        Err(e) => fail(e),
    }
}

async fn handle_get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<UserResponse> {
    match state.service.get_user(&id).await {
        Ok(Some(user)) => ok(user),
        Ok(None) => fail(AdminError::NotFound(id)),
        Err(e) => fail(e),
    }
}

async fn handle_add_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddUserRequest>,
) -> Json<UserResponse> {
    let new_user = NewUser {
        name: req.name,
        email: req.email,
        role: req.role,
        docs: req.docs,
    };
    match state.service.add_user(new_user, req.actor.as_deref()).await {
        Ok(user) => ok(user),
        Err(e) => fail(e),
    }
}

async fn handle_update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<StatusUpdateRequest>,
) -> Json<UserResponse> {
    match state
        .service
        .update_user_status(&id, req.status, req.actor.as_deref())
        .await
    {
        Ok(user) => ok(user),
        Err(e) => fail(e),
    }
}

async fn handle_approve(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Option<Json<ActorRequest>>,
) -> Json<UserResponse> {
    match state
        .service
        .update_user_status(&id, UserStatus::Approved, actor_of(&body))
        .await
    {
        Ok(user) => ok(user),
        Err(e) => fail(e),
    }
}

async fn handle_suspend(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Option<Json<ActorRequest>>,
) -> Json<UserResponse> {
    match state
        .service
        .update_user_status(&id, UserStatus::Suspended, actor_of(&body))
        .await
    {
        Ok(user) => ok(user),
        Err(e) => fail(e),
    }
}

async fn handle_verify(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Option<Json<ActorRequest>>,
) -> Json<VerifyResponse> {
    match state.service.verify_credentials(&id, actor_of(&body)).await {
        Ok(verified) => ok(verified),
        Err(e) => fail(e),
    }
}

async fn handle_delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Option<Json<ActorRequest>>,
) -> Json<UserResponse> {
    match state.service.delete_user(&id, actor_of(&body)).await {
        Ok(user) => ok(user),
        Err(e) => fail(e),
    }
}

async fn handle_restore(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Option<Json<ActorRequest>>,
) -> Json<UserResponse> {
    match state.service.restore_user(&id, actor_of(&body)).await {
        Ok(user) => ok(user),
        Err(e) => fail(e),
    }
}

async fn handle_audit_log(State(state): State<Arc<AppState>>) -> Json<AuditLogResponse> {
    match state.service.audit_log().await {
        Ok(entries) => ok(entries),
        Err(e) => fail(e),
    }
}

async fn handle_health() -> &'static str {
    "ok"
}
