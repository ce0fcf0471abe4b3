use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::session::store::SessionStore;
use crate::domain::session::use_cases::current::CurrentSessionUseCase;

pub struct CurrentSessionUseCaseImpl {
    pub sessions: Arc<dyn SessionStore>,
}

#[async_trait]
impl CurrentSessionUseCase for CurrentSessionUseCaseImpl {
    async fn execute(&self) -> Result<Option<Session>, SessionError> {
        Ok(self.sessions.load().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub Sessions {}

        #[async_trait]
        impl SessionStore for Sessions {
            async fn save(&self, session: &Session) -> Result<(), RepositoryError>;
            async fn load(&self) -> Result<Option<Session>, RepositoryError>;
            async fn clear(&self) -> Result<(), RepositoryError>;
        }
    }

    #[tokio::test]
    async fn should_report_no_session_when_signed_out() {
        let mut sessions = MockSessions::new();
        sessions.expect_load().returning(|| Ok(None));

        let use_case = CurrentSessionUseCaseImpl {
            sessions: Arc::new(sessions),
        };

        assert!(use_case.execute().await.unwrap().is_none());
    }
}
