use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Cart;

/// Storage port for the single active session's cart.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn load(&self) -> Result<Cart, RepositoryError>;
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
}
