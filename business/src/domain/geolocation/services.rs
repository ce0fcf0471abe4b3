use async_trait::async_trait;

use super::errors::GeoLocationError;
use super::model::GeoLocation;

/// Service port for resolving the visitor's location from their IP address.
///
/// Lookups hit an external service once per browse; failure is expected and
/// callers degrade to an unfiltered catalog.
#[async_trait]
pub trait GeoLocator: Send + Sync {
    async fn locate(&self) -> Result<GeoLocation, GeoLocationError>;
}
