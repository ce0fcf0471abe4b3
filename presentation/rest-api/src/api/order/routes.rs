use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::order::use_cases::list::{ListOrdersParams, ListOrdersUseCase};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::OrderResponse;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    list_use_case: Arc<dyn ListOrdersUseCase>,
}

impl OrderApi {
    pub fn new(list_use_case: Arc<dyn ListOrdersUseCase>) -> Self {
        Self { list_use_case }
    }
}

/// Orders API
#[OpenApi]
impl OrderApi {
    /// List orders
    ///
    /// Optionally filtered by buying user and destination country; both
    /// filters combine.
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_orders(
        &self,
        user_id: Query<Option<u32>>,
        country: Query<Option<String>>,
    ) -> ListOrdersResponse {
        let params = ListOrdersParams {
            user_id: user_id.0.map(UserId::new),
            country: country.0,
        };

        match self.list_use_case.execute(params).await {
            Ok(orders) => {
                let responses: Vec<OrderResponse> = orders.into_iter().map(|o| o.into()).collect();
                ListOrdersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListOrdersResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
