use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::geolocation::model::GeoLocation;

pub struct BrowseCatalogParams {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// Outcome of a storefront browse.
///
/// `location` is `None` when the geolocation lookup failed, in which case
/// the results are intentionally unfiltered by region and the caller
/// should surface a warning.
pub struct BrowseResult {
    pub products: Vec<Product>,
    pub location: Option<GeoLocation>,
    pub region_filtered: bool,
}

#[async_trait]
pub trait BrowseCatalogUseCase: Send + Sync {
    async fn execute(&self, params: BrowseCatalogParams) -> Result<BrowseResult, CatalogError>;
}
