use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::session::model::Session;
use business::domain::session::store::SessionStore;

use crate::store::MemoryStore;

/// Holds the single active storefront session inside the store.
pub struct SessionStoreMemory {
    store: Arc<MemoryStore>,
}

impl SessionStoreMemory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionStore for SessionStoreMemory {
    async fn save(&self, session: &Session) -> Result<(), RepositoryError> {
        self.store.write().await.session = Some(session.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<Session>, RepositoryError> {
        Ok(self.store.read().await.session.clone())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        self.store.write().await.session = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::account::model::{Account, CustomerAccount};
    use business::domain::shared::value_objects::UserId;

    fn session() -> Session {
        Session::open(Account::Customer(CustomerAccount {
            id: UserId::new(1),
            email: "test@buk.edu.ng".to_string(),
            password: "password".to_string(),
            name: "Aisha Bello".to_string(),
            phone: String::new(),
            student_id: String::new(),
            campus_role: "Student".to_string(),
            city: "Kano".to_string(),
            country: "Nigeria".to_string(),
            avatar: None,
        }))
    }

    #[tokio::test]
    async fn should_save_load_and_clear() {
        let store = Arc::new(MemoryStore::with_seed_data());
        let sessions = SessionStoreMemory::new(store);

        assert!(sessions.load().await.unwrap().is_none());

        sessions.save(&session()).await.unwrap();
        let loaded = sessions.load().await.unwrap().expect("session saved");
        assert_eq!(loaded.account.display_name(), "Aisha Bello");

        sessions.clear().await.unwrap();
        assert!(sessions.load().await.unwrap().is_none());
    }
}
