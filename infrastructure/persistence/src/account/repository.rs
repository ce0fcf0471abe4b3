use std::sync::Arc;

use async_trait::async_trait;

use business::domain::account::model::{Account, CustomerAccount, VendorAccount};
use business::domain::account::repository::AccountRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use crate::store::MemoryStore;

pub struct AccountRepositoryMemory {
    store: Arc<MemoryStore>,
}

impl AccountRepositoryMemory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryMemory {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError> {
        Ok(self
            .store
            .read()
            .await
            .accounts
            .iter()
            .find(|account| account.email() == email)
            .cloned())
    }

    async fn get_customer(&self, id: UserId) -> Result<CustomerAccount, RepositoryError> {
        self.store
            .read()
            .await
            .accounts
            .iter()
            .find_map(|account| match account {
                Account::Customer(customer) if customer.id == id => Some(customer.clone()),
                _ => None,
            })
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_vendor(&self, id: UserId) -> Result<VendorAccount, RepositoryError> {
        self.store
            .read()
            .await
            .accounts
            .iter()
            .find_map(|account| match account {
                Account::Vendor(vendor) if vendor.id == id => Some(vendor.clone()),
                _ => None,
            })
            .ok_or(RepositoryError::NotFound)
    }

    async fn save_customer(&self, customer: &CustomerAccount) -> Result<(), RepositoryError> {
        let mut data = self.store.write().await;
        let slot = data
            .accounts
            .iter_mut()
            .find(|account| matches!(account, Account::Customer(c) if c.id == customer.id))
            .ok_or(RepositoryError::NotFound)?;
        *slot = Account::Customer(customer.clone());
        Ok(())
    }

    async fn save_vendor(&self, vendor: &VendorAccount) -> Result<(), RepositoryError> {
        let mut data = self.store.write().await;
        let slot = data
            .accounts
            .iter_mut()
            .find(|account| matches!(account, Account::Vendor(v) if v.id == vendor.id))
            .ok_or(RepositoryError::NotFound)?;
        *slot = Account::Vendor(vendor.clone());
        Ok(())
    }
}
