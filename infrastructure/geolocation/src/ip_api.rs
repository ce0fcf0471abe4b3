use async_trait::async_trait;
use serde::Deserialize;

use business::domain::geolocation::errors::GeoLocationError;
use business::domain::geolocation::model::GeoLocation;
use business::domain::geolocation::services::GeoLocator;

/// Adapter for an ip-api.com style lookup service.
///
/// `GET <base_url>/json/` resolves the caller's public IP to a city,
/// country, and country code. The service is best-effort; every failure
/// maps to a `GeoLocationError` and callers fall back to an unfiltered
/// catalog.
pub struct IpApiClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: Option<String>,
    city: Option<String>,
    country: Option<String>,
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
}

impl IpApiClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self { client, base_url }
    }

    fn lookup_url(&self) -> String {
        format!("{}/json/", self.base_url.trim_end_matches('/'))
    }

    fn into_location(response: IpApiResponse) -> Result<GeoLocation, GeoLocationError> {
        if response.status.as_deref() == Some("fail") {
            return Err(GeoLocationError::Unavailable);
        }

        match (response.city, response.country) {
            (Some(city), Some(country)) => Ok(GeoLocation {
                city,
                country,
                country_code: response.country_code.unwrap_or_default(),
            }),
            _ => Err(GeoLocationError::InvalidResponse),
        }
    }
}

#[async_trait]
impl GeoLocator for IpApiClient {
    async fn locate(&self) -> Result<GeoLocation, GeoLocationError> {
        let response = self
            .client
            .get(self.lookup_url())
            .send()
            .await
            .map_err(|_| GeoLocationError::Unavailable)?;

        let body: IpApiResponse = response
            .json()
            .await
            .map_err(|_| GeoLocationError::InvalidResponse)?;

        Self::into_location(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_successful_payload() {
        let body = r#"{"status":"success","city":"Kano","country":"Nigeria","countryCode":"NG"}"#;
        let response: IpApiResponse = serde_json::from_str(body).unwrap();

        let location = IpApiClient::into_location(response).unwrap();

        assert_eq!(location.city, "Kano");
        assert_eq!(location.country, "Nigeria");
        assert_eq!(location.country_code, "NG");
    }

    #[test]
    fn should_reject_failed_lookup() {
        let body = r#"{"status":"fail","message":"private range"}"#;
        let response: IpApiResponse = serde_json::from_str(body).unwrap();

        assert_eq!(
            IpApiClient::into_location(response),
            Err(GeoLocationError::Unavailable)
        );
    }

    #[test]
    fn should_reject_payload_missing_fields() {
        let body = r#"{"status":"success","city":"Kano"}"#;
        let response: IpApiResponse = serde_json::from_str(body).unwrap();

        assert_eq!(
            IpApiClient::into_location(response),
            Err(GeoLocationError::InvalidResponse)
        );
    }

    #[test]
    fn should_build_lookup_url_without_double_slash() {
        let client = IpApiClient::new("http://ip-api.com/".to_string());
        assert_eq!(client.lookup_url(), "http://ip-api.com/json/");
    }
}
