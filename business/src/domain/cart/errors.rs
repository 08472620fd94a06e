/// The cart engine validates nothing beyond "does this cart-pie pair have a
/// record"; everything else, including a dangling pie reference, surfaces
/// as a store failure and propagates unmodified.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
