#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("account.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
