use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::get_cart::GetCartUseCase;
use business::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{AddCartItemRequest, CartResponse, UpdateCartQuantityRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    get_cart_use_case: Arc<dyn GetCartUseCase>,
}

impl CartApi {
    pub fn new(
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        get_cart_use_case: Arc<dyn GetCartUseCase>,
    ) -> Self {
        Self {
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            get_cart_use_case,
        }
    }
}

/// Shopping cart API
///
/// Operations on the active session's cart. The cart merges repeated adds
/// into one line per product and computes totals server-side.
#[OpenApi]
impl CartApi {
    /// Get the current cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> GetCartResponse {
        match self.get_cart_use_case.execute().await {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Add one unit of a product
    ///
    /// Increments the quantity when the product is already in the cart.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, body: Json<AddCartItemRequest>) -> AddCartItemResponse {
        let params = AddCartItemParams {
            product_id: ProductId::new(body.0.product_id),
        };

        match self.add_item_use_case.execute(params).await {
            Ok(cart) => AddCartItemResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddCartItemResponse::NotFound(json),
                    _ => AddCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Set the quantity of a cart line
    ///
    /// A quantity of 0 removes the line; an absent product id is a no-op.
    #[oai(
        path = "/cart/items/:product_id",
        method = "put",
        tag = "ApiTags::Cart"
    )]
    async fn update_quantity(
        &self,
        product_id: Path<u32>,
        body: Json<UpdateCartQuantityRequest>,
    ) -> UpdateCartQuantityResponse {
        let params = UpdateCartQuantityParams {
            product_id: ProductId::new(product_id.0),
            quantity: body.0.quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(cart) => UpdateCartQuantityResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UpdateCartQuantityResponse::InternalError(json)
            }
        }
    }

    /// Remove a product from the cart
    ///
    /// Idempotent; removing an absent product succeeds.
    #[oai(
        path = "/cart/items/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_item(&self, product_id: Path<u32>) -> RemoveCartItemResponse {
        let params = RemoveCartItemParams {
            product_id: ProductId::new(product_id.0),
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(cart) => RemoveCartItemResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                RemoveCartItemResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCartQuantityResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
