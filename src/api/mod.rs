pub mod admin;
pub mod catalog;
pub mod chat;
pub mod health;
pub mod reader;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

/// Routes for the catalog, admin panel, reader and chat relay
pub fn app_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/api/health", get(health::health_check))
        // Public catalog
        .route("/", get(catalog::index))
        .route("/reader/:id", get(reader::reader))
        // Admin panel
        .route("/admin", get(admin::admin_page).post(admin::admin_submit))
        // Assistant
        .route("/chat_api", post(chat::chat_api))
        .with_state(state)
}

/// Map a service error onto a distinct status with a JSON `error` body
pub fn error_response(err: DomainError) -> Response {
    let (status, message) = match &err {
        DomainError::NotFound => (StatusCode::NOT_FOUND, "Manuscript not found".to_string()),
        DomainError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        _ => {
            tracing::error!("Request failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    };

    (status, Json(json!({ "error": message }))).into_response()
}
