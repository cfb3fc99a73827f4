use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use garde::Validate;

use crate::app_state::AppState;
use crate::error::{ApiError, ApiResult};
use crate::models::recommendation::{
    CollectionProfile, CollectionRequest, Pairing, RecommendRequest, RecommendResponse,
};
use crate::services::catalog::POPULAR_PAIRINGS;
use crate::services::recommender;

/// POST /api/v1/recommendations: Anime pairings for one bottle.
pub async fn recommend_for_bottle(
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> ApiResult<Json<RecommendResponse>> {
    let Json(request) = payload?;
    let whiskey = request
        .whiskey
        .filter(|w| !w.name.trim().is_empty())
        .ok_or(ApiError::MissingWhiskey)?;
    whiskey.validate()?;

    let recommendations = recommender::recommend_for_whiskey(&whiskey);

    metrics::counter!("recommendation_requests_total", "kind" => "bottle").increment(1);
    metrics::histogram!("recommendations_returned", "kind" => "bottle")
        .record(recommendations.len() as f64);
    tracing::info!(
        whiskey = %whiskey.name,
        whiskey_type = %whiskey.whiskey_type,
        count = recommendations.len(),
        "Generated bottle recommendations"
    );

    let message = format!(
        "Found {} anime that match {}'s vibe!",
        recommendations.len(),
        whiskey.name
    );
    Ok(Json(RecommendResponse {
        recommendations,
        message,
    }))
}

/// POST /api/v1/recommendations/collection: Profile an entire collection.
pub async fn recommend_for_collection(
    State(state): State<AppState>,
    payload: Result<Json<CollectionRequest>, JsonRejection>,
) -> ApiResult<Json<CollectionProfile>> {
    let Json(request) = payload?;
    if request.whiskeys.len() < state.min_profile_bottles {
        return Err(ApiError::CollectionTooSmall {
            required: state.min_profile_bottles,
            actual: request.whiskeys.len(),
        });
    }
    for whiskey in &request.whiskeys {
        whiskey.validate()?;
    }

    let profile = recommender::recommend_for_collection(&request.whiskeys)?;

    metrics::counter!("recommendation_requests_total", "kind" => "collection").increment(1);
    metrics::histogram!("recommendations_returned", "kind" => "collection")
        .record(profile.recommendations.len() as f64);
    tracing::info!(
        bottles = request.whiskeys.len(),
        top_category = %profile.top_category,
        count = profile.recommendations.len(),
        "Generated collection profile"
    );

    Ok(Json(profile))
}

/// GET /api/v1/pairings: Fixed showcase pairings.
pub async fn popular_pairings() -> Json<&'static [Pairing]> {
    Json(POPULAR_PAIRINGS)
}
