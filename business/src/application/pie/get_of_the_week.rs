use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::pie::errors::PieError;
use crate::domain::pie::model::Pie;
use crate::domain::pie::repository::PieRepository;
use crate::domain::pie::use_cases::get_of_the_week::GetPiesOfTheWeekUseCase;

pub struct GetPiesOfTheWeekUseCaseImpl {
    pub repository: Arc<dyn PieRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPiesOfTheWeekUseCase for GetPiesOfTheWeekUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Pie>, PieError> {
        self.logger.info("Listing pies of the week");
        let pies = self.repository.get_pies_of_the_week().await?;
        Ok(pies)
    }
}
