use poem_openapi::Object;

use business::domain::catalog::model::{Product, Vendor};
use business::domain::catalog::use_cases::browse::BrowseResult;
use business::domain::geolocation::model::GeoLocation;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: u32,
    /// Product name
    pub name: String,
    /// Price in whole naira
    pub price: i64,
    /// Price formatted for display
    pub display_price: String,
    /// Product category
    pub category: String,
    /// Owning vendor identifier
    pub vendor_id: u32,
    /// Average customer rating
    #[oai(skip_serializing_if_is_none)]
    pub rating: Option<f32>,
    /// Discount percentage, when on sale
    #[oai(skip_serializing_if_is_none)]
    pub discount_percent: Option<u8>,
    /// Whether the product is currently in stock
    pub in_stock: bool,
    /// Image reference
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            price: product.price.amount(),
            display_price: product.price.to_string(),
            category: product.category,
            vendor_id: product.vendor_id.value(),
            rating: product.rating,
            discount_percent: product.discount_percent,
            in_stock: product.in_stock,
            image: product.image,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct VendorResponse {
    /// Vendor unique identifier
    pub id: u32,
    /// Vendor name
    pub name: String,
    /// Location on or around campus
    pub location: String,
    /// Average customer rating
    #[oai(skip_serializing_if_is_none)]
    pub rating: Option<f32>,
}

impl From<Vendor> for VendorResponse {
    fn from(vendor: Vendor) -> Self {
        Self {
            id: vendor.id.value(),
            name: vendor.name,
            location: vendor.location,
            rating: vendor.rating,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct GeoLocationResponse {
    pub city: String,
    pub country: String,
    pub country_code: String,
}

impl From<GeoLocation> for GeoLocationResponse {
    fn from(location: GeoLocation) -> Self {
        Self {
            city: location.city,
            country: location.country,
            country_code: location.country_code,
        }
    }
}

/// Filtered storefront view of the catalog.
#[derive(Debug, Clone, Object)]
pub struct BrowseResponse {
    /// Products matching every active filter
    pub products: Vec<ProductResponse>,
    /// Visitor location, when the lookup succeeded
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<GeoLocationResponse>,
    /// Whether region filtering was applied
    pub region_filtered: bool,
    /// Warning surfaced when results are unfiltered
    #[oai(skip_serializing_if_is_none)]
    pub warning: Option<String>,
}

impl From<BrowseResult> for BrowseResponse {
    fn from(result: BrowseResult) -> Self {
        let warning = if result.location.is_none() {
            Some("Unable to determine location. Showing all results.".to_string())
        } else {
            None
        };

        Self {
            products: result.products.into_iter().map(|p| p.into()).collect(),
            location: result.location.map(|l| l.into()),
            region_filtered: result.region_filtered,
            warning,
        }
    }
}
