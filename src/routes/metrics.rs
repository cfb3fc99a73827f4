use axum::extract::State;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Prometheus metrics scrape endpoint.
/// Returns metrics in Prometheus text exposition format.
pub async fn prometheus_metrics(State(handle): State<Arc<PrometheusHandle>>) -> impl IntoResponse {
    handle.render()
}

/// Register descriptions for the metrics the API records.
pub fn describe() {
    metrics::describe_counter!(
        "recommendation_requests_total",
        "Recommendation requests served, by kind"
    );
    metrics::describe_histogram!(
        "recommendations_returned",
        "Number of recommendations returned per request, by kind"
    );
}
