use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::recommender::RecommendError;

/// Errors surfaced by the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    #[error("Missing whiskey data")]
    MissingWhiskey,

    #[error("Invalid whiskey data: {0}")]
    Validation(#[from] garde::Report),

    #[error("Collection profile needs at least {required} bottles, got {actual}")]
    CollectionTooSmall { required: usize, actual: usize },

    #[error(transparent)]
    Recommend(#[from] RecommendError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Keeps axum's own status (400 syntax, 413 too large, 415 content type, 422 shape).
            ApiError::MalformedBody(rejection) => rejection.status(),
            ApiError::MissingWhiskey => StatusCode::BAD_REQUEST,
            ApiError::Validation(_)
            | ApiError::CollectionTooSmall { .. }
            | ApiError::Recommend(RecommendError::EmptyCollection) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        };

        tracing::warn!(status = %status, error = %self, "Request rejected");

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
