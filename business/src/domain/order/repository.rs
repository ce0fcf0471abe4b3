use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Order;

/// Optional filters for an order lookup; present filters are AND-ed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderQuery {
    pub user_id: Option<UserId>,
    pub country: Option<String>,
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find(&self, query: &OrderQuery) -> Result<Vec<Order>, RepositoryError>;
}
