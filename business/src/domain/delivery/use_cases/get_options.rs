use async_trait::async_trait;

use crate::domain::delivery::errors::DeliveryError;
use crate::domain::delivery::model::DeliveryOption;

pub struct GetDeliveryOptionsParams {
    pub country: Option<String>,
}

#[async_trait]
pub trait GetDeliveryOptionsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetDeliveryOptionsParams,
    ) -> Result<Vec<DeliveryOption>, DeliveryError>;
}
