use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::account::use_cases::update_customer_profile::{
    UpdateCustomerProfileParams, UpdateCustomerProfileUseCase,
};
use business::domain::dashboard::use_cases::customer_overview::CustomerDashboardUseCase;
use business::domain::shared::value_objects::UserId;

use crate::api::customer::dto::{
    CustomerOrderResponse, CustomerProfileResponse, StatResponse, UpdateCustomerProfileRequest,
    WishlistEntryResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CustomerApi {
    dashboard_use_case: Arc<dyn CustomerDashboardUseCase>,
    update_profile_use_case: Arc<dyn UpdateCustomerProfileUseCase>,
}

impl CustomerApi {
    pub fn new(
        dashboard_use_case: Arc<dyn CustomerDashboardUseCase>,
        update_profile_use_case: Arc<dyn UpdateCustomerProfileUseCase>,
    ) -> Self {
        Self {
            dashboard_use_case,
            update_profile_use_case,
        }
    }
}

/// Customer dashboard API
///
/// Dashboard reads return empty lists for unknown customers; profile
/// updates require an existing customer account.
#[OpenApi]
impl CustomerApi {
    /// Customer dashboard stats
    #[oai(path = "/customers/:id/stats", method = "get", tag = "ApiTags::Customers")]
    async fn get_stats(&self, id: Path<u32>) -> CustomerStatsResponse {
        match self.dashboard_use_case.stats(UserId::new(id.0)).await {
            Ok(stats) => {
                let responses: Vec<StatResponse> = stats.into_iter().map(|s| s.into()).collect();
                CustomerStatsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CustomerStatsResponse::InternalError(json)
            }
        }
    }

    /// Customer order history
    #[oai(
        path = "/customers/:id/orders",
        method = "get",
        tag = "ApiTags::Customers"
    )]
    async fn get_orders(&self, id: Path<u32>) -> CustomerOrdersResponse {
        match self.dashboard_use_case.orders(UserId::new(id.0)).await {
            Ok(orders) => {
                let responses: Vec<CustomerOrderResponse> =
                    orders.into_iter().map(|o| o.into()).collect();
                CustomerOrdersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CustomerOrdersResponse::InternalError(json)
            }
        }
    }

    /// Customer wishlist
    #[oai(
        path = "/customers/:id/wishlist",
        method = "get",
        tag = "ApiTags::Customers"
    )]
    async fn get_wishlist(&self, id: Path<u32>) -> CustomerWishlistResponse {
        match self.dashboard_use_case.wishlist(UserId::new(id.0)).await {
            Ok(wishlist) => {
                let responses: Vec<WishlistEntryResponse> =
                    wishlist.into_iter().map(|w| w.into()).collect();
                CustomerWishlistResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CustomerWishlistResponse::InternalError(json)
            }
        }
    }

    /// Update a customer profile
    ///
    /// Merges the provided fields over the stored profile.
    #[oai(
        path = "/customers/:id/profile",
        method = "put",
        tag = "ApiTags::Customers"
    )]
    async fn update_profile(
        &self,
        id: Path<u32>,
        body: Json<UpdateCustomerProfileRequest>,
    ) -> UpdateCustomerProfileResponse {
        let params = UpdateCustomerProfileParams {
            id: UserId::new(id.0),
            name: body.0.name,
            email: body.0.email,
            phone: body.0.phone,
            student_id: body.0.student_id,
            campus_role: body.0.campus_role,
            city: body.0.city,
            country: body.0.country,
            avatar: body.0.avatar,
        };

        match self.update_profile_use_case.execute(params).await {
            Ok(customer) => UpdateCustomerProfileResponse::Ok(Json(customer.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateCustomerProfileResponse::NotFound(json),
                    _ => UpdateCustomerProfileResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CustomerStatsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<StatResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CustomerOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CustomerOrderResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CustomerWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<WishlistEntryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCustomerProfileResponse {
    #[oai(status = 200)]
    Ok(Json<CustomerProfileResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
