use crate::config::AppConfig;

/// Shared application state passed to all route handlers.
///
/// The recommendation catalog is static, so only request-policy settings
/// live here.
#[derive(Debug, Clone)]
pub struct AppState {
    pub min_profile_bottles: usize,
    pub request_body_limit_bytes: usize,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            min_profile_bottles: config.min_profile_bottles,
            request_body_limit_bytes: config.request_body_limit_bytes,
        }
    }
}
