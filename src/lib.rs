//! Personal finance backend built with Rust.
//!
//! Users register and authenticate by email and password; financial entries
//! are persisted per user. PostgreSQL in production, in-memory stores for tests.
//!
//! The entry stores (`db::PgEntryRepository`, `repositories::InMemoryEntryRepository`)
//! are library surface only: no route or service calls them yet.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use handlers::http::AppState;
pub use services::UserService;

use axum::routing::{get, post};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router (health, users). Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let user_routes = axum::Router::new()
        .route("/", post(handlers::register))
        .route("/authenticate", post(handlers::authenticate))
        .route("/:id", get(handlers::get_user));

    axum::Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/users", user_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
