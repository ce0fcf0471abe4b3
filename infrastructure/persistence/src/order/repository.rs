use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::{OrderQuery, OrderRepository};

use crate::store::MemoryStore;

pub struct OrderRepositoryMemory {
    store: Arc<MemoryStore>,
}

impl OrderRepositoryMemory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryMemory {
    async fn find(&self, query: &OrderQuery) -> Result<Vec<Order>, RepositoryError> {
        let data = self.store.read().await;
        Ok(data
            .orders
            .iter()
            .filter(|order| query.user_id.is_none_or(|id| order.user_id == id))
            .filter(|order| {
                query
                    .country
                    .as_deref()
                    .is_none_or(|country| order.country == country)
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::UserId;

    #[tokio::test]
    async fn should_return_all_orders_without_filters() {
        let store = Arc::new(MemoryStore::with_seed_data());
        let repository = OrderRepositoryMemory::new(store);

        let orders = repository.find(&OrderQuery::default()).await.unwrap();

        assert_eq!(orders.len(), 2);
    }

    #[tokio::test]
    async fn should_filter_by_user() {
        let store = Arc::new(MemoryStore::with_seed_data());
        let repository = OrderRepositoryMemory::new(store);

        let orders = repository
            .find(&OrderQuery {
                user_id: Some(UserId::new(1)),
                country: None,
            })
            .await
            .unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].product, "Vitamin C Serum");
    }

    #[tokio::test]
    async fn should_and_user_and_country_filters() {
        let store = Arc::new(MemoryStore::with_seed_data());
        let repository = OrderRepositoryMemory::new(store);

        let orders = repository
            .find(&OrderQuery {
                user_id: Some(UserId::new(1)),
                country: Some("Ghana".to_string()),
            })
            .await
            .unwrap();

        assert!(orders.is_empty());
    }
}
