use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::repository::AccountRepository;
use crate::domain::account::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::logger::Logger;
use crate::domain::session::model::Session;
use crate::domain::session::store::SessionStore;

pub struct LoginUseCaseImpl {
    pub accounts: Arc<dyn AccountRepository>,
    pub sessions: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<Session, AccountError> {
        let account = self
            .accounts
            .find_by_email(&params.email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        // Mock storefront auth: plaintext equality against the seeded list.
        if account.password() != params.password {
            self.logger
                .warn(&format!("Rejected login for {}", params.email));
            return Err(AccountError::InvalidCredentials);
        }

        let session = Session::open(account);
        self.sessions.save(&session).await?;

        self.logger.info(&format!(
            "Opened {} session for {}",
            session.kind,
            session.account.display_name()
        ));
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::model::{Account, AccountKind, CustomerAccount};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub AccountRepo {}

        #[async_trait]
        impl AccountRepository for AccountRepo {
            async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError>;
            async fn get_customer(&self, id: UserId) -> Result<CustomerAccount, RepositoryError>;
            async fn get_vendor(&self, id: UserId) -> Result<crate::domain::account::model::VendorAccount, RepositoryError>;
            async fn save_customer(&self, customer: &CustomerAccount) -> Result<(), RepositoryError>;
            async fn save_vendor(&self, vendor: &crate::domain::account::model::VendorAccount) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Sessions {}

        #[async_trait]
        impl SessionStore for Sessions {
            async fn save(&self, session: &Session) -> Result<(), RepositoryError>;
            async fn load(&self) -> Result<Option<Session>, RepositoryError>;
            async fn clear(&self) -> Result<(), RepositoryError>;
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

    fn aisha() -> Account {
        Account::Customer(CustomerAccount {
            id: UserId::new(1),
            email: "test@buk.edu.ng".to_string(),
            password: "password".to_string(),
            name: "Aisha Bello".to_string(),
            phone: "+2348012345678".to_string(),
            student_id: "BUK/2021/001".to_string(),
            campus_role: "Student".to_string(),
            city: "Kano".to_string(),
            country: "Nigeria".to_string(),
            avatar: None,
        })
    }

    #[tokio::test]
    async fn should_open_session_on_matching_credentials() {
        let mut accounts = MockAccountRepo::new();
        accounts
            .expect_find_by_email()
            .returning(|_| Ok(Some(aisha())));
        let mut sessions = MockSessions::new();
        sessions.expect_save().returning(|_| Ok(()));

        let use_case = LoginUseCaseImpl {
            accounts: Arc::new(accounts),
            sessions: Arc::new(sessions),
            logger: mock_logger(),
        };

        let session = use_case
            .execute(LoginParams {
                email: "test@buk.edu.ng".to_string(),
                password: "password".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(session.kind, AccountKind::Customer);
        assert_eq!(session.account.display_name(), "Aisha Bello");
    }

    #[tokio::test]
    async fn should_reject_wrong_password() {
        let mut accounts = MockAccountRepo::new();
        accounts
            .expect_find_by_email()
            .returning(|_| Ok(Some(aisha())));
        let sessions = MockSessions::new();

        let use_case = LoginUseCaseImpl {
            accounts: Arc::new(accounts),
            sessions: Arc::new(sessions),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                email: "test@buk.edu.ng".to_string(),
                password: "hunter2".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AccountError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn should_reject_unknown_email() {
        let mut accounts = MockAccountRepo::new();
        accounts.expect_find_by_email().returning(|_| Ok(None));
        let sessions = MockSessions::new();

        let use_case = LoginUseCaseImpl {
            accounts: Arc::new(accounts),
            sessions: Arc::new(sessions),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                email: "nobody@buk.edu.ng".to_string(),
                password: "password".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AccountError::InvalidCredentials)));
    }
}
