use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{CustomerOverview, VendorOverview};

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn find_customer_overview(
        &self,
        id: UserId,
    ) -> Result<Option<CustomerOverview>, RepositoryError>;

    async fn find_vendor_overview(
        &self,
        id: UserId,
    ) -> Result<Option<VendorOverview>, RepositoryError>;
}
