use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::model::CustomerAccount;
use crate::domain::shared::value_objects::UserId;

/// Partial profile update; absent fields keep their current value.
pub struct UpdateCustomerProfileParams {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub student_id: Option<String>,
    pub campus_role: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub avatar: Option<String>,
}

#[async_trait]
pub trait UpdateCustomerProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateCustomerProfileParams,
    ) -> Result<CustomerAccount, AccountError>;
}
