use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::model::VendorAccount;
use crate::domain::account::repository::AccountRepository;
use crate::domain::account::use_cases::update_vendor_profile::{
    UpdateVendorProfileParams, UpdateVendorProfileUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateVendorProfileUseCaseImpl {
    pub repository: Arc<dyn AccountRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateVendorProfileUseCase for UpdateVendorProfileUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateVendorProfileParams,
    ) -> Result<VendorAccount, AccountError> {
        let existing = self
            .repository
            .get_vendor(params.id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => AccountError::NotFound,
                other => AccountError::Repository(other),
            })?;

        let updated = VendorAccount {
            id: existing.id,
            email: params.email.unwrap_or(existing.email),
            password: existing.password,
            business_name: params.business_name.unwrap_or(existing.business_name),
            business_type: params.business_type.unwrap_or(existing.business_type),
            phone: params.phone.unwrap_or(existing.phone),
            city: params.city.unwrap_or(existing.city),
            country: params.country.unwrap_or(existing.country),
            logo: params.logo.or(existing.logo),
        };

        self.repository.save_vendor(&updated).await?;

        self.logger
            .info(&format!("Updated vendor profile {}", updated.id));
        Ok(updated)
    }
}
