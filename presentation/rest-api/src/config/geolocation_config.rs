use std::env;

/// Configuration for the external IP-geolocation service
#[derive(Debug, Clone)]
pub struct GeolocationConfig {
    pub base_url: String,
}

impl GeolocationConfig {
    /// Load geolocation configuration from environment variables
    ///
    /// Environment variables:
    /// - GEOLOCATION_URL: Base URL of the lookup service
    ///   (default: "http://ip-api.com")
    pub fn from_env() -> Self {
        let base_url =
            env::var("GEOLOCATION_URL").unwrap_or_else(|_| "http://ip-api.com".to_string());

        Self { base_url }
    }
}
