use axum::{extract::State, response::Json};
use utoipa::openapi::OpenApi;

use crate::AppState;

pub async fn openapi_json(State(state): State<AppState>) -> Json<OpenApi> {
    Json(state.openapi.as_ref().clone())
}
