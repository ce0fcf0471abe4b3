use std::collections::HashMap;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use business::domain::account::model::Account;
use business::domain::cart::model::Cart;
use business::domain::catalog::model::{Product, Vendor};
use business::domain::dashboard::model::{CustomerOverview, VendorOverview};
use business::domain::delivery::model::DeliveryOption;
use business::domain::order::model::Order;
use business::domain::session::model::Session;
use business::domain::shared::value_objects::UserId;

/// Everything the marketplace serves, held in one place.
#[derive(Debug, Default)]
pub struct StoreData {
    pub products: Vec<Product>,
    pub vendors: Vec<Vendor>,
    pub orders: Vec<Order>,
    pub accounts: Vec<Account>,
    pub customer_overviews: HashMap<UserId, CustomerOverview>,
    pub vendor_overviews: HashMap<UserId, VendorOverview>,
    pub delivery_options: HashMap<String, Vec<DeliveryOption>>,
    pub default_delivery: Vec<DeliveryOption>,
    pub cart: Cart,
    pub session: Option<Session>,
}

/// The pseudo-database backing every repository adapter.
///
/// Constructed once at process start and shared behind an `Arc`; all
/// mutation goes through the repository adapters, which take the write
/// lock. Nothing survives process exit.
#[derive(Debug)]
pub struct MemoryStore {
    data: RwLock<StoreData>,
}

impl MemoryStore {
    /// An empty store; useful for tests that want full control of the
    /// contents.
    pub fn empty() -> Self {
        Self {
            data: RwLock::new(StoreData::default()),
        }
    }

    /// The store loaded with the stock marketplace dataset.
    pub fn with_seed_data() -> Self {
        Self {
            data: RwLock::new(crate::seed::seed_data()),
        }
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, StoreData> {
        self.data.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, StoreData> {
        self.data.write().await
    }
}
