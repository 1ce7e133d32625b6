use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::catalog::index,
        api::reader::reader,
        api::chat::chat_api,
    ),
    components(
        schemas(
            crate::models::Manuscript,
            crate::assistant::models::ChatRequest,
            crate::assistant::models::ChatResponse,
        )
    ),
    tags(
        (name = "manuscript-explorer", description = "Manuscript Explorer API")
    )
)]
pub struct ApiDoc;
