pub mod distilleries;
pub mod health;
pub mod metrics;
pub mod recommendations;
pub mod stats;

use axum::{routing::get, routing::post, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Build the API router. The Prometheus endpoint is mounted separately by the
/// binary because its recorder is process-global.
pub fn router(state: AppState) -> Router {
    let body_limit = state.request_body_limit_bytes;

    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/v1/recommendations",
            post(recommendations::recommend_for_bottle),
        )
        .route(
            "/api/v1/recommendations/collection",
            post(recommendations::recommend_for_collection),
        )
        .route("/api/v1/pairings", get(recommendations::popular_pairings))
        .route("/api/v1/stats", post(stats::collection_stats))
        .route(
            "/api/v1/distilleries",
            post(distilleries::distilleries_view),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(body_limit))
}
