#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
