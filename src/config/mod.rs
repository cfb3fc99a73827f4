use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Smallest collection the profile endpoint will analyse.
    #[serde(default = "default_min_profile_bottles")]
    pub min_profile_bottles: usize,

    /// Maximum accepted request body, in bytes.
    #[serde(default = "default_request_body_limit_bytes")]
    pub request_body_limit_bytes: usize,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_min_profile_bottles() -> usize {
    3
}

fn default_request_body_limit_bytes() -> usize {
    1024 * 1024
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            min_profile_bottles: default_min_profile_bottles(),
            request_body_limit_bytes: default_request_body_limit_bytes(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}
