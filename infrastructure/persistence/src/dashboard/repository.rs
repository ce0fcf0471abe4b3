use std::sync::Arc;

use async_trait::async_trait;

use business::domain::dashboard::model::{CustomerOverview, VendorOverview};
use business::domain::dashboard::repository::DashboardRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use crate::store::MemoryStore;

pub struct DashboardRepositoryMemory {
    store: Arc<MemoryStore>,
}

impl DashboardRepositoryMemory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DashboardRepository for DashboardRepositoryMemory {
    async fn find_customer_overview(
        &self,
        id: UserId,
    ) -> Result<Option<CustomerOverview>, RepositoryError> {
        Ok(self.store.read().await.customer_overviews.get(&id).cloned())
    }

    async fn find_vendor_overview(
        &self,
        id: UserId,
    ) -> Result<Option<VendorOverview>, RepositoryError> {
        Ok(self.store.read().await.vendor_overviews.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_serve_seeded_customer_overview() {
        let store = Arc::new(MemoryStore::with_seed_data());
        let repository = DashboardRepositoryMemory::new(store);

        let overview = repository
            .find_customer_overview(UserId::new(1))
            .await
            .unwrap()
            .expect("customer 1 is seeded");

        assert_eq!(overview.stats.len(), 3);
        assert_eq!(overview.orders.len(), 2);
        assert_eq!(overview.wishlist.len(), 2);
    }

    #[tokio::test]
    async fn should_miss_unknown_vendor_overview() {
        let store = Arc::new(MemoryStore::with_seed_data());
        let repository = DashboardRepositoryMemory::new(store);

        assert!(repository
            .find_vendor_overview(UserId::new(42))
            .await
            .unwrap()
            .is_none());
    }
}
