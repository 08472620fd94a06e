use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::pie::errors::PieError;
use crate::domain::pie::model::Pie;
use crate::domain::pie::repository::PieRepository;
use crate::domain::pie::use_cases::get_by_id::{GetPieByIdParams, GetPieByIdUseCase};

pub struct GetPieByIdUseCaseImpl {
    pub repository: Arc<dyn PieRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPieByIdUseCase for GetPieByIdUseCaseImpl {
    async fn execute(&self, params: GetPieByIdParams) -> Result<Pie, PieError> {
        self.logger
            .info(&format!("Fetching pie by id: {}", params.id));

        let pie = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PieError::NotFound,
                other => PieError::Repository(other),
            })?;

        Ok(pie)
    }
}
