use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::{OrderQuery, OrderRepository};
use crate::domain::order::use_cases::list::{ListOrdersParams, ListOrdersUseCase};

pub struct ListOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListOrdersUseCase for ListOrdersUseCaseImpl {
    async fn execute(&self, params: ListOrdersParams) -> Result<Vec<Order>, OrderError> {
        let query = OrderQuery {
            user_id: params.user_id,
            country: params.country,
        };
        let orders = self.repository.find(&query).await?;
        self.logger
            .debug(&format!("Order lookup matched {} orders", orders.len()));
        Ok(orders)
    }
}
