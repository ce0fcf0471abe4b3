use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::{Product, Vendor};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
}

#[async_trait]
pub trait VendorRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Vendor>, RepositoryError>;
}
