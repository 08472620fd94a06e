use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Pie;

/// Read-only catalog port. The application never writes pies; the seed
/// migration owns the table contents.
#[async_trait]
pub trait PieRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Pie>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Pie, RepositoryError>;
    async fn get_pies_of_the_week(&self) -> Result<Vec<Pie>, RepositoryError>;
}
