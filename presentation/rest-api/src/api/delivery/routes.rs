use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::delivery::use_cases::get_options::{
    GetDeliveryOptionsParams, GetDeliveryOptionsUseCase,
};

use crate::api::delivery::dto::DeliveryOptionResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct DeliveryApi {
    options_use_case: Arc<dyn GetDeliveryOptionsUseCase>,
}

impl DeliveryApi {
    pub fn new(options_use_case: Arc<dyn GetDeliveryOptionsUseCase>) -> Self {
        Self { options_use_case }
    }
}

/// Delivery options API
#[OpenApi]
impl DeliveryApi {
    /// List delivery options for a destination country
    ///
    /// Unknown or missing countries get the default international list.
    #[oai(path = "/delivery-options", method = "get", tag = "ApiTags::Delivery")]
    async fn get_delivery_options(&self, country: Query<Option<String>>) -> GetOptionsResponse {
        let params = GetDeliveryOptionsParams { country: country.0 };

        match self.options_use_case.execute(params).await {
            Ok(options) => {
                let responses: Vec<DeliveryOptionResponse> =
                    options.into_iter().map(|o| o.into()).collect();
                GetOptionsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetOptionsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOptionsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<DeliveryOptionResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
