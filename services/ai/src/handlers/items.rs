use axum::{extract::State, response::Json};
use tracing::debug;

use crate::extract::ApiJson;
use crate::models::{
    CategorizeResponse, EmbedResponse, ErrorResponse, ItemPayload, PrioritizeResponse,
};
use crate::AppState;

#[utoipa::path(
    post,
    path = "/categorize",
    tag = "items",
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Inferred category", body = CategorizeResponse),
        (status = 422, description = "Invalid item payload", body = ErrorResponse)
    )
)]
pub async fn categorize(
    State(state): State<AppState>,
    ApiJson(item): ApiJson<ItemPayload>,
) -> Json<CategorizeResponse> {
    debug!(item_id = %item.id, "Categorizing item");
    let categorization = state.analyzer.categorize(&item);
    Json(categorization.into())
}

#[utoipa::path(
    post,
    path = "/prioritize",
    tag = "items",
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Priority score", body = PrioritizeResponse),
        (status = 422, description = "Invalid item payload", body = ErrorResponse)
    )
)]
pub async fn prioritize(
    State(state): State<AppState>,
    ApiJson(item): ApiJson<ItemPayload>,
) -> Json<PrioritizeResponse> {
    debug!(item_id = %item.id, "Prioritizing item");
    Json(PrioritizeResponse {
        priority: state.analyzer.prioritize(&item),
    })
}

#[utoipa::path(
    post,
    path = "/embed",
    tag = "items",
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Embedding vector", body = EmbedResponse),
        (status = 422, description = "Invalid item payload", body = ErrorResponse)
    )
)]
pub async fn embed(
    State(state): State<AppState>,
    ApiJson(item): ApiJson<ItemPayload>,
) -> Json<EmbedResponse> {
    debug!(item_id = %item.id, "Embedding item");
    Json(EmbedResponse {
        vector: state.analyzer.embed(&item),
    })
}
