use std::env;

use business::domain::geolocation::model::HomeCampus;

/// Home campus configuration for region filtering
#[derive(Debug, Clone)]
pub struct CampusConfig {
    pub city: String,
    pub country: String,
}

impl CampusConfig {
    /// Load the home campus from environment variables
    ///
    /// Environment variables:
    /// - CAMPUS_CITY: City of the home campus (default: "Kano")
    /// - CAMPUS_COUNTRY: Country of the home campus (default: "Nigeria")
    pub fn from_env() -> Self {
        let city = env::var("CAMPUS_CITY").unwrap_or_else(|_| "Kano".to_string());
        let country = env::var("CAMPUS_COUNTRY").unwrap_or_else(|_| "Nigeria".to_string());

        Self { city, country }
    }

    pub fn home_campus(&self) -> HomeCampus {
        HomeCampus::new(self.city.clone(), self.country.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_home_campus_from_config() {
        let config = CampusConfig {
            city: "Kano".to_string(),
            country: "Nigeria".to_string(),
        };

        assert_eq!(config.home_campus(), HomeCampus::default());
    }
}
