#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoLocationError {
    #[error("geolocation.unavailable")]
    Unavailable,
    #[error("geolocation.invalid_response")]
    InvalidResponse,
}
