use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartLineRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartLineRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<i32, CartError> {
        self.logger.info(&format!(
            "Removing pie {} from cart {}",
            params.pie_id, params.cart_id
        ));

        let Some(mut line) = self
            .repository
            .find_by_pie_id(&params.cart_id, params.pie_id)
            .await?
        else {
            // Removing a pie that was never added is a no-op.
            return Ok(0);
        };

        if line.quantity > 1 {
            line.decrement();
            self.repository.save(&line).await?;
            Ok(line.quantity)
        } else {
            self.repository.delete(line.id).await?;
            Ok(0)
        }
    }
}
