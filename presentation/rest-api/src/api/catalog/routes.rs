use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::catalog::use_cases::browse::{BrowseCatalogParams, BrowseCatalogUseCase};
use business::domain::catalog::use_cases::get_all_products::GetAllProductsUseCase;
use business::domain::catalog::use_cases::get_all_vendors::GetAllVendorsUseCase;

use crate::api::catalog::dto::{BrowseResponse, ProductResponse, VendorResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    products_use_case: Arc<dyn GetAllProductsUseCase>,
    vendors_use_case: Arc<dyn GetAllVendorsUseCase>,
    browse_use_case: Arc<dyn BrowseCatalogUseCase>,
}

impl CatalogApi {
    pub fn new(
        products_use_case: Arc<dyn GetAllProductsUseCase>,
        vendors_use_case: Arc<dyn GetAllVendorsUseCase>,
        browse_use_case: Arc<dyn BrowseCatalogUseCase>,
    ) -> Self {
        Self {
            products_use_case,
            vendors_use_case,
            browse_use_case,
        }
    }
}

/// Catalog API
///
/// Raw product/vendor reference data plus the filtered storefront view.
#[OpenApi]
impl CatalogApi {
    /// List all products
    #[oai(path = "/products", method = "get", tag = "ApiTags::Catalog")]
    async fn get_products(&self) -> GetProductsResponse {
        match self.products_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductsResponse::InternalError(json)
            }
        }
    }

    /// List all vendors
    #[oai(path = "/vendors", method = "get", tag = "ApiTags::Catalog")]
    async fn get_vendors(&self) -> GetVendorsResponse {
        match self.vendors_use_case.execute().await {
            Ok(vendors) => {
                let responses: Vec<VendorResponse> = vendors.into_iter().map(|v| v.into()).collect();
                GetVendorsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetVendorsResponse::InternalError(json)
            }
        }
    }

    /// Browse the catalog with storefront filters
    ///
    /// Applies free-text search, category selection, and region filtering
    /// derived from the visitor's IP location. When the location lookup
    /// fails the catalog is served unfiltered and a warning is attached.
    #[oai(path = "/catalog", method = "get", tag = "ApiTags::Catalog")]
    async fn browse(
        &self,
        /// Case-insensitive match against product or vendor names
        search: Query<Option<String>>,
        /// Exact category; "All" or absent matches everything
        category: Query<Option<String>>,
    ) -> BrowseCatalogResponse {
        let params = BrowseCatalogParams {
            search: search.0,
            category: category.0,
        };

        match self.browse_use_case.execute(params).await {
            Ok(result) => BrowseCatalogResponse::Ok(Json(result.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                BrowseCatalogResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetVendorsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<VendorResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum BrowseCatalogResponse {
    #[oai(status = 200)]
    Ok(Json<BrowseResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
