use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::pie::errors::PieError;
use crate::domain::pie::model::Pie;
use crate::domain::pie::repository::PieRepository;
use crate::domain::pie::use_cases::get_all::GetAllPiesUseCase;

pub struct GetAllPiesUseCaseImpl {
    pub repository: Arc<dyn PieRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllPiesUseCase for GetAllPiesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Pie>, PieError> {
        self.logger.info("Listing the pie catalog");
        let pies = self.repository.get_all().await?;
        self.logger
            .info(&format!("Catalog holds {} pies", pies.len()));
        Ok(pies)
    }
}
