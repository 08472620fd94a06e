use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartLineRepository;
use crate::domain::cart::use_cases::get_total::{GetCartTotalParams, GetCartTotalUseCase};
use crate::domain::logger::Logger;

pub struct GetCartTotalUseCaseImpl {
    pub repository: Arc<dyn CartLineRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartTotalUseCase for GetCartTotalUseCaseImpl {
    async fn execute(&self, params: GetCartTotalParams) -> Result<BigDecimal, CartError> {
        self.logger
            .info(&format!("Computing total of cart {}", params.cart_id));

        let total = self.repository.total(&params.cart_id).await?;

        self.logger.debug(&format!("Cart total is {}", total));
        Ok(total)
    }
}
