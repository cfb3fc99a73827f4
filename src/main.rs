use axum::routing::get;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use dram_pairing::app_state::AppState;
use dram_pairing::config::AppConfig;
use dram_pairing::routes;
use dram_pairing::services::catalog::{self, CATALOG};

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!(
        categories = CATALOG.len(),
        entries = catalog::entry_count(),
        min_profile_bottles = config.min_profile_bottles,
        "Initializing dram-pairing server"
    );

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);
    routes::metrics::describe();

    let state = AppState::new(&config);

    let app = routes::router(state).route(
        "/metrics",
        get(routes::metrics::prometheus_metrics).with_state(prometheus_handle),
    );

    tracing::info!("Starting dram-pairing on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
