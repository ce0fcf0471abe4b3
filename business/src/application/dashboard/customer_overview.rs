use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::dashboard::errors::DashboardError;
use crate::domain::dashboard::model::{CustomerOrderLine, StatEntry, WishlistEntry};
use crate::domain::dashboard::repository::DashboardRepository;
use crate::domain::dashboard::use_cases::customer_overview::CustomerDashboardUseCase;
use crate::domain::shared::value_objects::UserId;

pub struct CustomerDashboardUseCaseImpl {
    pub repository: Arc<dyn DashboardRepository>,
}

#[async_trait]
impl CustomerDashboardUseCase for CustomerDashboardUseCaseImpl {
    async fn stats(&self, id: UserId) -> Result<Vec<StatEntry>, DashboardError> {
        let overview = self.repository.find_customer_overview(id).await?;
        Ok(overview.map(|o| o.stats).unwrap_or_default())
    }

    async fn orders(&self, id: UserId) -> Result<Vec<CustomerOrderLine>, DashboardError> {
        let overview = self.repository.find_customer_overview(id).await?;
        Ok(overview.map(|o| o.orders).unwrap_or_default())
    }

    async fn wishlist(&self, id: UserId) -> Result<Vec<WishlistEntry>, DashboardError> {
        let overview = self.repository.find_customer_overview(id).await?;
        Ok(overview.map(|o| o.wishlist).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::model::{CustomerOverview, StatValue, VendorOverview};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::Price;
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
    async fn should_return_seeded_stats() {
        let mut mock_repo = MockDashboardRepo::new();
        mock_repo.expect_find_customer_overview().returning(|_| {
            Ok(Some(CustomerOverview {
                stats: vec![StatEntry {
                    label: "Total Spent".to_string(),
                    value: StatValue::Amount(Price::new(45_000)),
                }],
                orders: vec![],
                wishlist: vec![],
            }))
        });

        let use_case = CustomerDashboardUseCaseImpl {
            repository: Arc::new(mock_repo),
        };

        let stats = use_case.stats(UserId::new(1)).await.unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].label, "Total Spent");
    }

    #[tokio::test]
    async fn should_return_empty_lists_for_unknown_customer() {
        let mut mock_repo = MockDashboardRepo::new();
        mock_repo
            .expect_find_customer_overview()
            .returning(|_| Ok(None));

        let use_case = CustomerDashboardUseCaseImpl {
            repository: Arc::new(mock_repo),
        };

        assert!(use_case.stats(UserId::new(9)).await.unwrap().is_empty());
        assert!(use_case.orders(UserId::new(9)).await.unwrap().is_empty());
        assert!(use_case.wishlist(UserId::new(9)).await.unwrap().is_empty());
    }
}
