//! HTTP API handlers.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::quiz::Question;

/// Root greeting: `{"Hello": "World"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GreetingResponse {
    #[serde(rename = "Hello")]
    #[schema(example = "World")]
    pub hello: String,
}

/// Question list. Always empty until a question source is wired in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Service is up", body = GreetingResponse))
)]
pub async fn root() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        hello: "World".to_string(),
    })
}

/// Questions handler - placeholder returning an empty list.
#[utoipa::path(
    get,
    path = "/questions",
    tag = "questions",
    responses((status = 200, description = "Question list (currently always empty)", body = QuestionsResponse))
)]
pub async fn questions() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: Vec::new(),
    })
}
