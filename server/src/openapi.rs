//! OpenAPI document for the HTTP surface.

use axum::Json;
use problems_core::ProblemModel;
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers::{self, Health};

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Problems API", description = "CRUD over an in-memory problem collection"),
    paths(
        handlers::health,
        handlers::list_problems,
        handlers::get_problem,
        handlers::create_problem,
        handlers::update_problem,
        handlers::delete_problem,
    ),
    components(schemas(ProblemModel, ErrorBody, Health)),
    tags(
        (name = "problems", description = "Problem resource"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_problem_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/problems"));
        assert!(doc.paths.paths.contains_key("/api/problems/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn document_exposes_problem_schema() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schema = &json["components"]["schemas"]["ProblemModel"];
        assert!(schema["properties"].get("isActive").is_some());
        assert!(schema["properties"].get("title").is_some());
    }
}
