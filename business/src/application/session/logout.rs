use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::store::SessionStore;
use crate::domain::session::use_cases::logout::LogoutUseCase;

pub struct LogoutUseCaseImpl {
    pub sessions: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogoutUseCase for LogoutUseCaseImpl {
    async fn execute(&self) -> Result<(), SessionError> {
        self.sessions.clear().await?;
        self.logger.info("Closed storefront session");
        Ok(())
    }
}
