use std::sync::Arc;

use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartStore;
use business::domain::errors::RepositoryError;

use crate::store::MemoryStore;

/// Holds the single active session's cart inside the store.
pub struct CartStoreMemory {
    store: Arc<MemoryStore>,
}

impl CartStoreMemory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CartStore for CartStoreMemory {
    async fn load(&self) -> Result<Cart, RepositoryError> {
        Ok(self.store.read().await.cart.clone())
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        self.store.write().await.cart = cart.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::catalog::model::Product;
    use business::domain::shared::value_objects::{Price, ProductId, VendorId};

    #[tokio::test]
    async fn should_round_trip_cart_state() {
        let store = Arc::new(MemoryStore::with_seed_data());
        let cart_store = CartStoreMemory::new(store);

        let mut cart = cart_store.load().await.unwrap();
        assert!(cart.is_empty());

        cart.add_item(&Product {
            id: ProductId::new(1),
            name: "Vitamin C Serum".to_string(),
            price: Price::new(3500),
            category: "Skin Care".to_string(),
            vendor_id: VendorId::new(1),
            rating: None,
            discount_percent: None,
            in_stock: true,
            image: None,
        });
        cart_store.save(&cart).await.unwrap();

        let reloaded = cart_store.load().await.unwrap();
        assert_eq!(reloaded.total_item_count(), 1);
    }
}
