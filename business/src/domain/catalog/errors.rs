#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
