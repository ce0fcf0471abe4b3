use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartStore;
use crate::domain::cart::use_cases::get_cart::GetCartUseCase;

pub struct GetCartUseCaseImpl {
    pub cart_store: Arc<dyn CartStore>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self) -> Result<Cart, CartError> {
        Ok(self.cart_store.load().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub Store {}

        #[async_trait]
        impl CartStore for Store {
            async fn load(&self) -> Result<Cart, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
        }
    }

    #[tokio::test]
    async fn should_return_stored_cart() {
        let mut store = MockStore::new();
        store.expect_load().returning(|| Ok(Cart::new()));

        let use_case = GetCartUseCaseImpl {
            cart_store: Arc::new(store),
        };

        let cart = use_case.execute().await.unwrap();
        assert!(cart.is_empty());
    }
}
