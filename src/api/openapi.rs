//! OpenAPI description of the HTTP API.

use utoipa::OpenApi;

use super::handlers::{GreetingResponse, QuestionsResponse};
use crate::quiz::Question;

/// OpenAPI document for the service.
#[derive(OpenApi)]
#[openapi(
    info(title = "FalconBowl API", description = "Quiz-bowl game backend"),
    paths(super::handlers::root, super::handlers::questions),
    components(schemas(GreetingResponse, QuestionsResponse, Question)),
    tags(
        (name = "health", description = "Liveness"),
        (name = "questions", description = "Question delivery")
    )
)]
pub struct ApiDoc;

/// Render the OpenAPI document as pretty-printed JSON.
pub fn openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}
