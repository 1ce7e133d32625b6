use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::api::error_response;
use crate::infrastructure::AppState;

/// Public catalog listing
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All manuscripts in insertion order")
    )
)]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    match state.catalog.list().await {
        Ok(manuscripts) => (
            StatusCode::OK,
            Json(json!({
                "total": manuscripts.len(),
                "manuscripts": manuscripts,
            })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
