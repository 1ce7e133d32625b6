use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::api::error_response;
use crate::infrastructure::AppState;
use crate::models::Manuscript;

/// Detail view of one manuscript
#[utoipa::path(
    get,
    path = "/reader/{id}",
    params(("id" = i32, Path, description = "Manuscript id")),
    responses(
        (status = 200, description = "The manuscript", body = Manuscript),
        (status = 404, description = "No manuscript with this id")
    )
)]
pub async fn reader(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.reader.get_by_id(id).await {
        Ok(manuscript) => (StatusCode::OK, Json(json!({ "manuscript": manuscript }))).into_response(),
        Err(e) => error_response(e),
    }
}
