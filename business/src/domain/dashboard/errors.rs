#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
