use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::pie::errors::PieError;
use crate::domain::pie::model::Pie;

pub struct GetPieByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetPieByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetPieByIdParams) -> Result<Pie, PieError>;
}
