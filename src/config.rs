use std::env;

/// Default endpoint when `REDIS_URL` is unset, e.g. in local development.
pub const DEFAULT_REDIS_URL: &str = "redis://localhost";

/// Revocation store settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub redis_url: String,
}

impl Settings {
    /// Load settings from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load environment variables if available

        let redis_url =
            env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string());

        Self { redis_url }
    }
}
