use async_trait::async_trait;

use crate::domain::dashboard::errors::DashboardError;
use crate::domain::dashboard::model::{CustomerOrderLine, StatEntry, WishlistEntry};
use crate::domain::shared::value_objects::UserId;

/// Customer dashboard reads. An id with no seeded overview yields empty
/// collections rather than an error.
#[async_trait]
pub trait CustomerDashboardUseCase: Send + Sync {
    async fn stats(&self, id: UserId) -> Result<Vec<StatEntry>, DashboardError>;
    async fn orders(&self, id: UserId) -> Result<Vec<CustomerOrderLine>, DashboardError>;
    async fn wishlist(&self, id: UserId) -> Result<Vec<WishlistEntry>, DashboardError>;
}
