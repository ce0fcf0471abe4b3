use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Vendor;
use crate::domain::catalog::repository::VendorRepository;
use crate::domain::catalog::use_cases::get_all_vendors::GetAllVendorsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllVendorsUseCaseImpl {
    pub repository: Arc<dyn VendorRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllVendorsUseCase for GetAllVendorsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Vendor>, CatalogError> {
        let vendors = self.repository.get_all().await?;
        self.logger
            .debug(&format!("Fetched {} marketplace vendors", vendors.len()));
        Ok(vendors)
    }
}
