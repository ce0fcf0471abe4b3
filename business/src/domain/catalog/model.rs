use crate::domain::shared::value_objects::{Price, ProductId, VendorId};

/// A catalog product. Read-only reference data from the storefront's
/// perspective; only the seeded store mutates these collections.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: String,
    pub vendor_id: VendorId,
    pub rating: Option<f32>,
    pub discount_percent: Option<u8>,
    pub in_stock: bool,
    pub image: Option<String>,
}

/// A marketplace vendor. The location string drives region filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub location: String,
    pub rating: Option<f32>,
}
