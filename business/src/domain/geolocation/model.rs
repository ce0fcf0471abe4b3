/// Visitor location resolved from an external IP-geolocation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoLocation {
    pub city: String,
    pub country: String,
    pub country_code: String,
}

/// The fixed city/country pair treated as the default, unfiltered-delivery
/// region. Visitors resolving here see the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeCampus {
    pub city: String,
    pub country: String,
}

impl HomeCampus {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
        }
    }

    pub fn matches(&self, location: &GeoLocation) -> bool {
        location.city == self.city && location.country == self.country
    }
}

impl Default for HomeCampus {
    fn default() -> Self {
        Self::new("Kano", "Nigeria")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kano() -> GeoLocation {
        GeoLocation {
            city: "Kano".to_string(),
            country: "Nigeria".to_string(),
            country_code: "NG".to_string(),
        }
    }

    #[test]
    fn should_match_home_campus_location() {
        assert!(HomeCampus::default().matches(&kano()));
    }

    #[test]
    fn should_not_match_same_country_different_city() {
        let lagos = GeoLocation {
            city: "Lagos".to_string(),
            ..kano()
        };
        assert!(!HomeCampus::default().matches(&lagos));
    }

    #[test]
    fn should_honor_configured_campus() {
        let campus = HomeCampus::new("Accra", "Ghana");
        let accra = GeoLocation {
            city: "Accra".to_string(),
            country: "Ghana".to_string(),
            country_code: "GH".to_string(),
        };
        assert!(campus.matches(&accra));
        assert!(!campus.matches(&kano()));
    }
}
