use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::delivery::errors::DeliveryError;
use crate::domain::delivery::model::DeliveryOption;
use crate::domain::delivery::repository::DeliveryOptionRepository;
use crate::domain::delivery::use_cases::get_options::{
    GetDeliveryOptionsParams, GetDeliveryOptionsUseCase,
};
use crate::domain::logger::Logger;

pub struct GetDeliveryOptionsUseCaseImpl {
    pub repository: Arc<dyn DeliveryOptionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetDeliveryOptionsUseCase for GetDeliveryOptionsUseCaseImpl {
    async fn execute(
        &self,
        params: GetDeliveryOptionsParams,
    ) -> Result<Vec<DeliveryOption>, DeliveryError> {
        if let Some(country) = params.country {
            if let Some(options) = self.repository.find_by_country(&country).await? {
                return Ok(options);
            }
            self.logger.debug(&format!(
                "No delivery options for {}, serving defaults",
                country
            ));
        }

        Ok(self.repository.default_options().await?)
    }
}
