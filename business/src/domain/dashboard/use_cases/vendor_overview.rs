use async_trait::async_trait;

use crate::domain::dashboard::errors::DashboardError;
use crate::domain::dashboard::model::{StatEntry, VendorOrderLine, VendorProductLine};
use crate::domain::shared::value_objects::UserId;

/// Vendor dashboard reads. An id with no seeded overview yields empty
/// collections rather than an error.
#[async_trait]
pub trait VendorDashboardUseCase: Send + Sync {
    async fn stats(&self, id: UserId) -> Result<Vec<StatEntry>, DashboardError>;
    async fn products(&self, id: UserId) -> Result<Vec<VendorProductLine>, DashboardError>;
    async fn orders(&self, id: UserId) -> Result<Vec<VendorOrderLine>, DashboardError>;
}
