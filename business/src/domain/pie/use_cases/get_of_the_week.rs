use async_trait::async_trait;

use crate::domain::pie::errors::PieError;
use crate::domain::pie::model::Pie;

/// Featured pies shown on the storefront home page.
#[async_trait]
pub trait GetPiesOfTheWeekUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Pie>, PieError>;
}
