use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Session;

/// Storage port for the active session, with explicit save/load/clear
/// lifecycle instead of ambient storage reads.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn save(&self, session: &Session) -> Result<(), RepositoryError>;
    async fn load(&self) -> Result<Option<Session>, RepositoryError>;
    async fn clear(&self) -> Result<(), RepositoryError>;
}
