use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartStore;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct AddCartItemUseCaseImpl {
    pub products: Arc<dyn ProductRepository>,
    pub cart_store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        let product = self
            .products
            .get_by_id(params.product_id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        let mut cart = self.cart_store.load().await?;
        cart.add_item(&product);
        self.cart_store.save(&cart).await?;

        self.logger.info(&format!(
            "Added product {} to cart, {} items total",
            product.id,
            cart.total_item_count()
        ));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::Product;
    use crate::domain::shared::value_objects::{Price, ProductId, VendorId};
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub Store {}

        #[async_trait]
        impl CartStore for Store {
            async fn load(&self) -> Result<Cart, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn rice() -> Product {
        Product {
            id: ProductId::new(3),
            name: "Jollof Rice".to_string(),
            price: Price::new(1500),
            category: "Food".to_string(),
            vendor_id: VendorId::new(5),
            rating: Some(4.8),
            discount_percent: None,
            in_stock: true,
            image: None,
        }
    }

    #[tokio::test]
    async fn should_add_known_product_and_persist_cart() {
        let mut products = MockProductRepo::new();
        products.expect_get_by_id().returning(|_| Ok(rice()));

        let mut store = MockStore::new();
        store.expect_load().returning(|| Ok(Cart::new()));
        store
            .expect_save()
            .withf(|cart: &Cart| cart.total_item_count() == 1)
            .returning(|_| Ok(()));

        let use_case = AddCartItemUseCaseImpl {
            products: Arc::new(products),
            cart_store: Arc::new(store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                product_id: ProductId::new(3),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().total_item_count(), 1);
    }

    #[tokio::test]
    async fn should_increment_existing_line() {
        let mut products = MockProductRepo::new();
        products.expect_get_by_id().returning(|_| Ok(rice()));

        let mut store = MockStore::new();
        store.expect_load().returning(|| {
            let mut cart = Cart::new();
            cart.add_item(&rice());
            Ok(cart)
        });
        store.expect_save().returning(|_| Ok(()));

        let use_case = AddCartItemUseCaseImpl {
            products: Arc::new(products),
            cart_store: Arc::new(store),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddCartItemParams {
                product_id: ProductId::new(3),
            })
            .await
            .unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_item_count(), 2);
    }

    #[tokio::test]
    async fn should_reject_unknown_product() {
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let store = MockStore::new();

        let use_case = AddCartItemUseCaseImpl {
            products: Arc::new(products),
            cart_store: Arc::new(store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                product_id: ProductId::new(99),
            })
            .await;

        assert!(matches!(result, Err(CartError::ProductNotFound)));
    }
}
