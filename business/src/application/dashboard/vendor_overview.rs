use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::dashboard::errors::DashboardError;
use crate::domain::dashboard::model::{StatEntry, VendorOrderLine, VendorProductLine};
use crate::domain::dashboard::repository::DashboardRepository;
use crate::domain::dashboard::use_cases::vendor_overview::VendorDashboardUseCase;
use crate::domain::shared::value_objects::UserId;

pub struct VendorDashboardUseCaseImpl {
    pub repository: Arc<dyn DashboardRepository>,
}

#[async_trait]
impl VendorDashboardUseCase for VendorDashboardUseCaseImpl {
    async fn stats(&self, id: UserId) -> Result<Vec<StatEntry>, DashboardError> {
        let overview = self.repository.find_vendor_overview(id).await?;
        Ok(overview.map(|o| o.stats).unwrap_or_default())
    }

    async fn products(&self, id: UserId) -> Result<Vec<VendorProductLine>, DashboardError> {
        let overview = self.repository.find_vendor_overview(id).await?;
        Ok(overview.map(|o| o.products).unwrap_or_default())
    }

    async fn orders(&self, id: UserId) -> Result<Vec<VendorOrderLine>, DashboardError> {
        let overview = self.repository.find_vendor_overview(id).await?;
        Ok(overview.map(|o| o.orders).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::model::{CustomerOverview, VendorOverview};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::{Price, ProductId};
    use mockall::mock;

    mock! {
        pub DashboardRepo {}

        #[async_trait]
        impl DashboardRepository for DashboardRepo {
            async fn find_customer_overview(
                &self,
                id: UserId,
            ) -> Result<Option<CustomerOverview>, RepositoryError>;
            async fn find_vendor_overview(
                &self,
                id: UserId,
            ) -> Result<Option<VendorOverview>, RepositoryError>;
        }
    }

    #[tokio::test]
    async fn should_return_seeded_products() {
        let mut mock_repo = MockDashboardRepo::new();
        mock_repo.expect_find_vendor_overview().returning(|_| {
            Ok(Some(VendorOverview {
                stats: vec![],
                products: vec![VendorProductLine {
                    id: ProductId::new(1),
                    name: "Vitamin C Serum".to_string(),
                    price: Price::new(3500),
                    category: "Skin Care".to_string(),
                    stock: 50,
                }],
                orders: vec![],
            }))
        });

        let use_case = VendorDashboardUseCaseImpl {
            repository: Arc::new(mock_repo),
        };

        let products = use_case.products(UserId::new(3)).await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].stock, 50);
    }

    #[tokio::test]
    async fn should_return_empty_lists_for_unknown_vendor() {
        let mut mock_repo = MockDashboardRepo::new();
        mock_repo
            .expect_find_vendor_overview()
            .returning(|_| Ok(None));

        let use_case = VendorDashboardUseCaseImpl {
            repository: Arc::new(mock_repo),
        };

        assert!(use_case.stats(UserId::new(9)).await.unwrap().is_empty());
        assert!(use_case.products(UserId::new(9)).await.unwrap().is_empty());
        assert!(use_case.orders(UserId::new(9)).await.unwrap().is_empty());
    }
}
