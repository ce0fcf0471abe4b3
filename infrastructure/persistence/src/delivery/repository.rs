use std::sync::Arc;

use async_trait::async_trait;

use business::domain::delivery::model::DeliveryOption;
use business::domain::delivery::repository::DeliveryOptionRepository;
use business::domain::errors::RepositoryError;

use crate::store::MemoryStore;

pub struct DeliveryOptionRepositoryMemory {
    store: Arc<MemoryStore>,
}

impl DeliveryOptionRepositoryMemory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DeliveryOptionRepository for DeliveryOptionRepositoryMemory {
    async fn find_by_country(
        &self,
        country: &str,
    ) -> Result<Option<Vec<DeliveryOption>>, RepositoryError> {
        Ok(self.store.read().await.delivery_options.get(country).cloned())
    }

    async fn default_options(&self) -> Result<Vec<DeliveryOption>, RepositoryError> {
        Ok(self.store.read().await.default_delivery.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_serve_country_list() {
        let store = Arc::new(MemoryStore::with_seed_data());
        let repository = DeliveryOptionRepositoryMemory::new(store);

        let options = repository.find_by_country("Nigeria").await.unwrap();

        let options = options.expect("Nigeria is seeded");
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].method, "Campus Pickup");
    }

    #[tokio::test]
    async fn should_miss_unknown_country() {
        let store = Arc::new(MemoryStore::with_seed_data());
        let repository = DeliveryOptionRepositoryMemory::new(store);

        assert!(repository.find_by_country("Atlantis").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_serve_default_list() {
        let store = Arc::new(MemoryStore::with_seed_data());
        let repository = DeliveryOptionRepositoryMemory::new(store);

        let options = repository.default_options().await.unwrap();

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].method, "International Shipping");
    }
}
