use axum::extract::rejection::JsonRejection;
use axum::Json;
use garde::Validate;

use crate::error::ApiResult;
use crate::models::recommendation::CollectionRequest;
use crate::models::stats::CollectionStats;
use crate::services::stats;

/// POST /api/v1/stats: Summary figures for a collection.
pub async fn collection_stats(
    payload: Result<Json<CollectionRequest>, JsonRejection>,
) -> ApiResult<Json<CollectionStats>> {
    let Json(request) = payload?;
    for whiskey in &request.whiskeys {
        whiskey.validate()?;
    }

    let summary = stats::collection_stats(&request.whiskeys);
    tracing::info!(
        bottles = summary.total_bottles,
        total_value = summary.total_value,
        "Computed collection stats"
    );
    Ok(Json(summary))
}
