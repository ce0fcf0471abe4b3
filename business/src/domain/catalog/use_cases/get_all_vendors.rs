use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Vendor;

#[async_trait]
pub trait GetAllVendorsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Vendor>, CatalogError>;
}
