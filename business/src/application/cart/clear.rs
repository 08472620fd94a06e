use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartLineRepository;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartLineRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<u64, CartError> {
        self.logger
            .info(&format!("Clearing cart {}", params.cart_id));

        let count = self.repository.delete_by_cart_id(&params.cart_id).await?;

        self.logger
            .info(&format!("Removed {} cart lines", count));
        Ok(count)
    }
}
