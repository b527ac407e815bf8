//! User HTTP handlers: register, authenticate, fetch by id.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::models::User;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthenticateRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_string()).unwrap_or_default(),
            name: user.name,
            email: user.email,
            created_at: user.created_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let Json(body) = payload?;
    body.validate().map_err(|e| AppError::Validation(e.to_string()))?;

    let user = User::with_password(body.name, body.email, &body.password)?;
    let saved = state.user_service().save_user(user).await?;

    Ok((StatusCode::CREATED, Json(saved.into())))
}

/// POST /api/users/authenticate
pub async fn authenticate(
    State(state): State<AppState>,
    payload: Result<Json<AuthenticateRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let Json(body) = payload?;
    let user = state
        .user_service()
        .authenticate(&body.email, &body.password)
        .await?;
    Ok(Json(user.into()))
}

/// GET /api/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let Path(id) = id?;
    let user = state
        .user_service()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
    Ok(Json(user.into()))
}
