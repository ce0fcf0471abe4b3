use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Account, CustomerAccount, VendorAccount};

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError>;
    async fn get_customer(&self, id: UserId) -> Result<CustomerAccount, RepositoryError>;
    async fn get_vendor(&self, id: UserId) -> Result<VendorAccount, RepositoryError>;
    async fn save_customer(&self, customer: &CustomerAccount) -> Result<(), RepositoryError>;
    async fn save_vendor(&self, vendor: &VendorAccount) -> Result<(), RepositoryError>;
}
