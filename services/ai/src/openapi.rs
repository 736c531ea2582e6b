use utoipa::openapi::OpenApi as OpenApiDoc;
use utoipa::OpenApi;

use crate::handlers;
use crate::models::{
    CategorizeResponse, EmbedResponse, ErrorResponse, HealthResponse, ItemPayload,
    PrioritizeResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::items::categorize,
        handlers::items::prioritize,
        handlers::items::embed,
    ),
    components(schemas(
        ItemPayload,
        HealthResponse,
        CategorizeResponse,
        PrioritizeResponse,
        EmbedResponse,
        ErrorResponse,
    )),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "items", description = "Placeholder item analysis")
    )
)]
struct ApiDoc;

/// OpenAPI document for the service, titled with the configured service name.
pub fn doc(title: &str) -> OpenApiDoc {
    let mut doc = ApiDoc::openapi();
    doc.info.title = title.to_string();
    doc.info.version = env!("CARGO_PKG_VERSION").to_string();
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_lists_routes() {
        let doc = doc("Today AI Service");
        assert_eq!(doc.info.title, "Today AI Service");
        for path in ["/health", "/categorize", "/prioritize", "/embed"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
