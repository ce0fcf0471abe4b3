use crate::domain::geolocation::model::{GeoLocation, HomeCampus};
use crate::domain::shared::value_objects::VendorId;

use super::model::{Product, Vendor};

/// Category selection for catalog filtering. `All` is the sentinel that
/// matches every product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        if raw == "All" {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(raw.to_string())
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

/// Retains products whose name, or owning vendor's name, contains the
/// query (case-insensitive). An empty or whitespace query matches all.
pub fn filter_by_search(products: Vec<Product>, vendors: &[Vendor], query: &str) -> Vec<Product> {
    if query.trim().is_empty() {
        return products;
    }

    let needle = query.to_lowercase();
    products
        .into_iter()
        .filter(|product| {
            if product.name.to_lowercase().contains(&needle) {
                return true;
            }
            vendors
                .iter()
                .find(|vendor| vendor.id == product.vendor_id)
                .is_some_and(|vendor| vendor.name.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Retains products with an exact category match. The `All` sentinel
/// returns the input unchanged, order preserved.
pub fn filter_by_category(products: Vec<Product>, category: &CategoryFilter) -> Vec<Product> {
    match category {
        CategoryFilter::All => products,
        CategoryFilter::Named(name) => products
            .into_iter()
            .filter(|product| &product.category == name)
            .collect(),
    }
}

/// Region filter driven by the visitor's resolved location.
///
/// Rules:
/// - No location, or a location on the home campus -> unfiltered catalog.
/// - Otherwise retain vendors whose location string contains the visitor's
///   city or country, then retain products owned by those vendors.
pub fn filter_by_region(
    products: Vec<Product>,
    vendors: &[Vendor],
    location: Option<&GeoLocation>,
    campus: &HomeCampus,
) -> Vec<Product> {
    let Some(location) = location else {
        return products;
    };
    if campus.matches(location) {
        return products;
    }

    let nearby: Vec<VendorId> = vendors
        .iter()
        .filter(|vendor| {
            vendor.location.contains(&location.city) || vendor.location.contains(&location.country)
        })
        .map(|vendor| vendor.id)
        .collect();

    products
        .into_iter()
        .filter(|product| nearby.contains(&product.vendor_id))
        .collect()
}

/// Compound filter: search, then category, then region. All three
/// predicates are AND-ed; each stage preserves catalog order.
pub fn apply(
    products: Vec<Product>,
    vendors: &[Vendor],
    query: &str,
    category: &CategoryFilter,
    location: Option<&GeoLocation>,
    campus: &HomeCampus,
) -> Vec<Product> {
    let found = filter_by_search(products, vendors, query);
    let in_category = filter_by_category(found, category);
    filter_by_region(in_category, vendors, location, campus)
}
