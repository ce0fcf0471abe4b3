use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

pub struct UpdateCartQuantityParams {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[async_trait]
pub trait UpdateCartQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<Cart, CartError>;
}
