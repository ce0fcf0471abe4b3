use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::model::CustomerAccount;
use crate::domain::account::repository::AccountRepository;
use crate::domain::account::use_cases::update_customer_profile::{
    UpdateCustomerProfileParams, UpdateCustomerProfileUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateCustomerProfileUseCaseImpl {
    pub repository: Arc<dyn AccountRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCustomerProfileUseCase for UpdateCustomerProfileUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateCustomerProfileParams,
    ) -> Result<CustomerAccount, AccountError> {
        let existing = self
            .repository
            .get_customer(params.id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => AccountError::NotFound,
                other => AccountError::Repository(other),
            })?;

        let updated = CustomerAccount {
            id: existing.id,
            email: params.email.unwrap_or(existing.email),
            password: existing.password,
            name: params.name.unwrap_or(existing.name),
            phone: params.phone.unwrap_or(existing.phone),
            student_id: params.student_id.unwrap_or(existing.student_id),
            campus_role: params.campus_role.unwrap_or(existing.campus_role),
            city: params.city.unwrap_or(existing.city),
            country: params.country.unwrap_or(existing.country),
            avatar: params.avatar.or(existing.avatar),
        };

        self.repository.save_customer(&updated).await?;

        self.logger
            .info(&format!("Updated customer profile {}", updated.id));
        Ok(updated)
    }
}
