use poem::middleware::Cors;

use super::campus_config::CampusConfig;
use super::geolocation_config::GeolocationConfig;
use super::{cors_config, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub campus: CampusConfig,
    pub geolocation: GeolocationConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            campus: CampusConfig::from_env(),
            geolocation: GeolocationConfig::from_env(),
        }
    }
}
