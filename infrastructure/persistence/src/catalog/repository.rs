use std::sync::Arc;

use async_trait::async_trait;

use business::domain::catalog::model::{Product, Vendor};
use business::domain::catalog::repository::{ProductRepository, VendorRepository};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;

use crate::store::MemoryStore;

pub struct ProductRepositoryMemory {
    store: Arc<MemoryStore>,
}

impl ProductRepositoryMemory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.store.read().await.products.clone())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.store
            .read()
            .await
            .products
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

pub struct VendorRepositoryMemory {
    store: Arc<MemoryStore>,
}

impl VendorRepositoryMemory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl VendorRepository for VendorRepositoryMemory {
    async fn get_all(&self) -> Result<Vec<Vendor>, RepositoryError> {
        Ok(self.store.read().await.vendors.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_serve_seeded_products() {
        let store = Arc::new(MemoryStore::with_seed_data());
        let repository = ProductRepositoryMemory::new(store);

        let products = repository.get_all().await.unwrap();

        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name, "Vitamin C Serum");
    }

    #[tokio::test]
    async fn should_find_product_by_id() {
        let store = Arc::new(MemoryStore::with_seed_data());
        let repository = ProductRepositoryMemory::new(store);

        let product = repository.get_by_id(ProductId::new(3)).await.unwrap();

        assert_eq!(product.name, "Jollof Rice");
    }

    #[tokio::test]
    async fn should_report_missing_product() {
        let store = Arc::new(MemoryStore::with_seed_data());
        let repository = ProductRepositoryMemory::new(store);

        let result = repository.get_by_id(ProductId::new(99)).await;

        assert_eq!(result.unwrap_err(), RepositoryError::NotFound);
    }

    #[tokio::test]
    async fn should_serve_seeded_vendors() {
        let store = Arc::new(MemoryStore::with_seed_data());
        let repository = VendorRepositoryMemory::new(store);

        let vendors = repository.get_all().await.unwrap();

        assert_eq!(vendors.len(), 3);
    }
}
