use async_trait::async_trait;

use crate::domain::pie::errors::PieError;
use crate::domain::pie::model::Pie;

#[async_trait]
pub trait GetAllPiesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Pie>, PieError>;
}
