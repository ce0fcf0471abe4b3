#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
