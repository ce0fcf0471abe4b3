use std::sync::Arc;

use geolocation::ip_api::IpApiClient;
use logger::TracingLogger;
use persistence::account::repository::AccountRepositoryMemory;
use persistence::cart::repository::CartStoreMemory;
use persistence::catalog::repository::{ProductRepositoryMemory, VendorRepositoryMemory};
use persistence::dashboard::repository::DashboardRepositoryMemory;
use persistence::delivery::repository::DeliveryOptionRepositoryMemory;
use persistence::order::repository::OrderRepositoryMemory;
use persistence::session::repository::SessionStoreMemory;
use persistence::store::MemoryStore;

use business::application::account::login::LoginUseCaseImpl;
use business::application::account::update_customer_profile::UpdateCustomerProfileUseCaseImpl;
use business::application::account::update_vendor_profile::UpdateVendorProfileUseCaseImpl;
use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;
use business::application::catalog::browse::BrowseCatalogUseCaseImpl;
use business::application::catalog::get_all_products::GetAllProductsUseCaseImpl;
use business::application::catalog::get_all_vendors::GetAllVendorsUseCaseImpl;
use business::application::dashboard::customer_overview::CustomerDashboardUseCaseImpl;
use business::application::dashboard::vendor_overview::VendorDashboardUseCaseImpl;
use business::application::delivery::get_options::GetDeliveryOptionsUseCaseImpl;
use business::application::order::list::ListOrdersUseCaseImpl;
use business::application::session::current::CurrentSessionUseCaseImpl;
use business::application::session::logout::LogoutUseCaseImpl;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub order_api: crate::api::order::routes::OrderApi,
    pub delivery_api: crate::api::delivery::routes::DeliveryApi,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub customer_api: crate::api::customer::routes::CustomerApi,
    pub vendor_api: crate::api::vendor::routes::VendorApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // The seeded in-memory store backs every repository adapter.
        let store = Arc::new(MemoryStore::with_seed_data());
        let product_repository = Arc::new(ProductRepositoryMemory::new(store.clone()));
        let vendor_repository = Arc::new(VendorRepositoryMemory::new(store.clone()));
        let order_repository = Arc::new(OrderRepositoryMemory::new(store.clone()));
        let delivery_repository = Arc::new(DeliveryOptionRepositoryMemory::new(store.clone()));
        let account_repository = Arc::new(AccountRepositoryMemory::new(store.clone()));
        let dashboard_repository = Arc::new(DashboardRepositoryMemory::new(store.clone()));
        let cart_store = Arc::new(CartStoreMemory::new(store.clone()));
        let session_store = Arc::new(SessionStoreMemory::new(store));

        let locator = Arc::new(IpApiClient::new(config.geolocation.base_url.clone()));

        // Catalog use cases
        let get_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_vendors_use_case = Arc::new(GetAllVendorsUseCaseImpl {
            repository: vendor_repository.clone(),
            logger: logger.clone(),
        });
        let browse_use_case = Arc::new(BrowseCatalogUseCaseImpl {
            products: product_repository.clone(),
            vendors: vendor_repository,
            locator,
            campus: config.campus.home_campus(),
            logger: logger.clone(),
        });

        // Cart use cases
        let add_cart_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            products: product_repository,
            cart_store: cart_store.clone(),
            logger: logger.clone(),
        });
        let update_cart_quantity_use_case = Arc::new(UpdateCartQuantityUseCaseImpl {
            cart_store: cart_store.clone(),
            logger: logger.clone(),
        });
        let remove_cart_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            cart_store: cart_store.clone(),
            logger: logger.clone(),
        });
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl { cart_store });

        // Order and delivery use cases
        let list_orders_use_case = Arc::new(ListOrdersUseCaseImpl {
            repository: order_repository,
            logger: logger.clone(),
        });
        let delivery_options_use_case = Arc::new(GetDeliveryOptionsUseCaseImpl {
            repository: delivery_repository,
            logger: logger.clone(),
        });

        // Account and session use cases
        let login_use_case = Arc::new(LoginUseCaseImpl {
            accounts: account_repository.clone(),
            sessions: session_store.clone(),
            logger: logger.clone(),
        });
        let current_session_use_case = Arc::new(CurrentSessionUseCaseImpl {
            sessions: session_store.clone(),
        });
        let logout_use_case = Arc::new(LogoutUseCaseImpl {
            sessions: session_store,
            logger: logger.clone(),
        });
        let update_customer_profile_use_case = Arc::new(UpdateCustomerProfileUseCaseImpl {
            repository: account_repository.clone(),
            logger: logger.clone(),
        });
        let update_vendor_profile_use_case = Arc::new(UpdateVendorProfileUseCaseImpl {
            repository: account_repository,
            logger,
        });

        // Dashboard use cases
        let customer_dashboard_use_case = Arc::new(CustomerDashboardUseCaseImpl {
            repository: dashboard_repository.clone(),
        });
        let vendor_dashboard_use_case = Arc::new(VendorDashboardUseCaseImpl {
            repository: dashboard_repository,
        });

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(
            get_products_use_case,
            get_vendors_use_case,
            browse_use_case,
        );
        let cart_api = crate::api::cart::routes::CartApi::new(
            add_cart_item_use_case,
            update_cart_quantity_use_case,
            remove_cart_item_use_case,
            get_cart_use_case,
        );
        let order_api = crate::api::order::routes::OrderApi::new(list_orders_use_case);
        let delivery_api = crate::api::delivery::routes::DeliveryApi::new(delivery_options_use_case);
        let auth_api = crate::api::auth::routes::AuthApi::new(
            login_use_case,
            current_session_use_case,
            logout_use_case,
        );
        let customer_api = crate::api::customer::routes::CustomerApi::new(
            customer_dashboard_use_case,
            update_customer_profile_use_case,
        );
        let vendor_api = crate::api::vendor::routes::VendorApi::new(
            vendor_dashboard_use_case,
            update_vendor_profile_use_case,
        );

        Self {
            health_api,
            catalog_api,
            cart_api,
            order_api,
            delivery_api,
            auth_api,
            customer_api,
            vendor_api,
        }
    }
}
