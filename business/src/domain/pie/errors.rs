#[derive(Debug, thiserror::Error)]
pub enum PieError {
    #[error("pie.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
