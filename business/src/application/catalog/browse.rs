use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::filter::{self, CategoryFilter};
use crate::domain::catalog::repository::{ProductRepository, VendorRepository};
use crate::domain::catalog::use_cases::browse::{
    BrowseCatalogParams, BrowseCatalogUseCase, BrowseResult,
};
use crate::domain::geolocation::model::HomeCampus;
use crate::domain::geolocation::services::GeoLocator;
use crate::domain::logger::Logger;

pub struct BrowseCatalogUseCaseImpl {
    pub products: Arc<dyn ProductRepository>,
    pub vendors: Arc<dyn VendorRepository>,
    pub locator: Arc<dyn GeoLocator>,
    pub campus: HomeCampus,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BrowseCatalogUseCase for BrowseCatalogUseCaseImpl {
    async fn execute(&self, params: BrowseCatalogParams) -> Result<BrowseResult, CatalogError> {
        let products = self.products.get_all().await?;
        let vendors = self.vendors.get_all().await?;

        // Fail open: an unreachable geolocation service must not hide the
        // catalog, it only disables region filtering.
        let location = match self.locator.locate().await {
            Ok(location) => Some(location),
            Err(err) => {
                self.logger.warn(&format!(
                    "Geolocation lookup failed, serving unfiltered catalog: {}",
                    err
                ));
                None
            }
        };

        let query = params.search.unwrap_or_default();
        let category = params
            .category
            .as_deref()
            .map(CategoryFilter::parse)
            .unwrap_or_default();

        let region_filtered = location
            .as_ref()
            .is_some_and(|location| !self.campus.matches(location));

        let products = filter::apply(
            products,
            &vendors,
            &query,
            &category,
            location.as_ref(),
            &self.campus,
        );

        Ok(BrowseResult {
            products,
            location,
            region_filtered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::{Product, Vendor};
    use crate::domain::errors::RepositoryError;
    use crate::domain::geolocation::errors::GeoLocationError;
    use crate::domain::geolocation::model::GeoLocation;
    use crate::domain::shared::value_objects::{Price, ProductId, VendorId};
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub VendorRepo {}

        #[async_trait]
        impl VendorRepository for VendorRepo {
            async fn get_all(&self) -> Result<Vec<Vendor>, RepositoryError>;
        }
    }

    mock! {
        pub Locator {}

        #[async_trait]
        impl GeoLocator for Locator {
            async fn locate(&self) -> Result<GeoLocation, GeoLocationError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn seeded_products() -> Vec<Product> {
        vec![
            Product {
                id: ProductId::new(1),
                name: "Vitamin C Serum".to_string(),
                price: Price::new(3500),
                category: "Skin Care".to_string(),
                vendor_id: VendorId::new(1),
                rating: Some(4.5),
                discount_percent: Some(25),
                in_stock: true,
                image: None,
            },
            Product {
                id: ProductId::new(2),
                name: "Wireless Earbuds".to_string(),
                price: Price::new(7000),
                category: "Tech".to_string(),
                vendor_id: VendorId::new(2),
                rating: Some(4.2),
                discount_percent: None,
                in_stock: true,
                image: None,
            },
        ]
    }

    fn seeded_vendors() -> Vec<Vendor> {
        vec![
            Vendor {
                id: VendorId::new(1),
                name: "Glow Skincare".to_string(),
                location: "Old Site".to_string(),
                rating: Some(4.6),
            },
            Vendor {
                id: VendorId::new(2),
                name: "Tech Hub".to_string(),
                location: "New Site".to_string(),
                rating: Some(4.3),
            },
        ]
    }

    fn use_case(locator: MockLocator) -> BrowseCatalogUseCaseImpl {
        let mut products = MockProductRepo::new();
        products.expect_get_all().returning(|| Ok(seeded_products()));
        let mut vendors = MockVendorRepo::new();
        vendors.expect_get_all().returning(|| Ok(seeded_vendors()));

        BrowseCatalogUseCaseImpl {
            products: Arc::new(products),
            vendors: Arc::new(vendors),
            locator: Arc::new(locator),
            campus: HomeCampus::default(),
            logger: mock_logger(),
        }
    }

    fn on_campus() -> GeoLocation {
        GeoLocation {
            city: "Kano".to_string(),
            country: "Nigeria".to_string(),
            country_code: "NG".to_string(),
        }
    }

    #[tokio::test]
    async fn should_serve_unfiltered_catalog_when_geolocation_fails() {
        let mut locator = MockLocator::new();
        locator
            .expect_locate()
            .returning(|| Err(GeoLocationError::Unavailable));

        let result = use_case(locator)
            .execute(BrowseCatalogParams {
                search: None,
                category: None,
            })
            .await
            .unwrap();

        assert_eq!(result.products.len(), 2);
        assert!(result.location.is_none());
        assert!(!result.region_filtered);
    }

    #[tokio::test]
    async fn should_not_region_filter_on_home_campus() {
        let mut locator = MockLocator::new();
        locator.expect_locate().returning(|| Ok(on_campus()));

        let result = use_case(locator)
            .execute(BrowseCatalogParams {
                search: None,
                category: None,
            })
            .await
            .unwrap();

        assert_eq!(result.products.len(), 2);
        assert!(!result.region_filtered);
        assert_eq!(result.location, Some(on_campus()));
    }

    #[tokio::test]
    async fn should_region_filter_off_campus_visitors() {
        let mut locator = MockLocator::new();
        locator.expect_locate().returning(|| {
            Ok(GeoLocation {
                city: "Accra".to_string(),
                country: "Ghana".to_string(),
                country_code: "GH".to_string(),
            })
        });

        let result = use_case(locator)
            .execute(BrowseCatalogParams {
                search: None,
                category: None,
            })
            .await
            .unwrap();

        // No seeded vendor mentions Accra or Ghana.
        assert!(result.products.is_empty());
        assert!(result.region_filtered);
    }

    #[tokio::test]
    async fn should_apply_search_and_category_together() {
        let mut locator = MockLocator::new();
        locator.expect_locate().returning(|| Ok(on_campus()));

        let result = use_case(locator)
            .execute(BrowseCatalogParams {
                search: Some("tech".to_string()),
                category: Some("Tech".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.products.len(), 1);
        assert_eq!(result.products[0].name, "Wireless Earbuds");
    }

    #[tokio::test]
    async fn should_fail_when_catalog_cannot_be_loaded() {
        let mut products = MockProductRepo::new();
        products
            .expect_get_all()
            .returning(|| Err(RepositoryError::Persistence));
        let mut vendors = MockVendorRepo::new();
        vendors.expect_get_all().returning(|| Ok(seeded_vendors()));
        let locator = MockLocator::new();

        let use_case = BrowseCatalogUseCaseImpl {
            products: Arc::new(products),
            vendors: Arc::new(vendors),
            locator: Arc::new(locator),
            campus: HomeCampus::default(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BrowseCatalogParams {
                search: None,
                category: None,
            })
            .await;

        assert!(matches!(result, Err(CatalogError::Repository(_))));
    }
}
