use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::session::model::Session;

pub struct LoginParams {
    pub email: String,
    pub password: String,
}

/// Mock credential check: plaintext equality against the seeded account
/// list. A successful login opens and persists a storefront session.
#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Result<Session, AccountError>;
}
