use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartStore;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateCartQuantityUseCaseImpl {
    pub cart_store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartQuantityUseCase for UpdateCartQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<Cart, CartError> {
        let mut cart = self.cart_store.load().await?;
        cart.update_quantity(params.product_id, params.quantity);
        self.cart_store.save(&cart).await?;

        self.logger.info(&format!(
            "Set quantity of product {} to {}",
            params.product_id, params.quantity
        ));
        Ok(cart)
    }
}
