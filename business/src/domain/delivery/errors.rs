#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
