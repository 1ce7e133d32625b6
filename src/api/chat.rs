use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::Value;

use crate::assistant::models::{ChatRequest, ChatResponse};
use crate::assistant::service::UNAVAILABLE_RESPONSE;
use crate::infrastructure::AppState;

/// Relay a visitor question to the assistant.
///
/// Always answers 200. A body that is not a JSON object gets the
/// unavailability text.
#[utoipa::path(
    post,
    path = "/chat_api",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant answer or fallback text", body = ChatResponse)
    )
)]
pub async fn chat_api(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let request = match payload {
        Ok(Json(body @ Value::Object(_))) => serde_json::from_value::<ChatRequest>(body),
        Ok(Json(other)) => {
            tracing::debug!("Chat payload is not an object: {}", other);
            return Json(ChatResponse {
                response: UNAVAILABLE_RESPONSE.to_string(),
            });
        }
        Err(rejection) => {
            tracing::debug!("Unreadable chat payload: {}", rejection.body_text());
            return Json(ChatResponse {
                response: UNAVAILABLE_RESPONSE.to_string(),
            });
        }
    };

    let message = match request {
        Ok(request) => request.message_text(),
        Err(e) => {
            tracing::debug!("Chat payload rejected: {}", e);
            return Json(ChatResponse {
                response: UNAVAILABLE_RESPONSE.to_string(),
            });
        }
    };

    let response = state.assistant.ask(message.as_deref()).await;
    Json(ChatResponse { response })
}
