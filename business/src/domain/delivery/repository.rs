use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::DeliveryOption;

#[async_trait]
pub trait DeliveryOptionRepository: Send + Sync {
    /// Options for a known destination country, `None` when the country has
    /// no dedicated list.
    async fn find_by_country(
        &self,
        country: &str,
    ) -> Result<Option<Vec<DeliveryOption>>, RepositoryError>;

    /// The fallback list served for unrecognized destinations.
    async fn default_options(&self) -> Result<Vec<DeliveryOption>, RepositoryError>;
}
