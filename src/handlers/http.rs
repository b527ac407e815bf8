//! Shared HTTP state and the health probe.

use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::services::UserService;

/// Shared application state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

impl AppState {
    pub fn new(user_service: UserService) -> Self {
        Self { user_service }
    }

    pub fn user_service(&self) -> &UserService {
        &self.user_service
    }
}

/// GET /health — liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "financas" })),
    )
}
