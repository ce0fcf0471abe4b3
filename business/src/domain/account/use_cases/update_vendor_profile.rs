use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::model::VendorAccount;
use crate::domain::shared::value_objects::UserId;

/// Partial profile update; absent fields keep their current value.
pub struct UpdateVendorProfileParams {
    pub id: UserId,
    pub business_name: Option<String>,
    pub business_type: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub logo: Option<String>,
}

#[async_trait]
pub trait UpdateVendorProfileUseCase: Send + Sync {
    async fn execute(&self, params: UpdateVendorProfileParams)
    -> Result<VendorAccount, AccountError>;
}
