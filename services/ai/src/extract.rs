use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor whose rejections render as [`ApiError`].
///
/// The body is parsed as JSON whatever the `Content-Type` header says, and an
/// empty or unparsable body is a validation failure like any other bad shape.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await?;
        let value = serde_json::from_slice(&body)
            .map_err(|e| ApiError::Validation(format!("Invalid item payload: {}", e)))?;
        Ok(ApiJson(value))
    }
}
