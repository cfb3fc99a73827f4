use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::services::catalog::{self, CATALOG};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub catalog: CatalogHealth,
}

#[derive(Serialize)]
pub struct CatalogHealth {
    pub categories: usize,
    pub entries: usize,
}

/// GET /health: Liveness plus catalog size.
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog: CatalogHealth {
            categories: CATALOG.len(),
            entries: catalog::entry_count(),
        },
    };

    (StatusCode::OK, Json(response))
}
