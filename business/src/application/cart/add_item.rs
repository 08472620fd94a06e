use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLine;
use crate::domain::cart::repository::CartLineRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::logger::Logger;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartLineRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartLine, CartError> {
        self.logger.info(&format!(
            "Adding pie {} to cart {}",
            params.pie_id, params.cart_id
        ));

        let line = match self
            .repository
            .find_by_pie_id(&params.cart_id, params.pie_id)
            .await?
        {
            Some(mut existing) => {
                existing.increment();
                existing
            }
            None => CartLine::new(params.cart_id, params.pie_id),
        };

        self.repository.save(&line).await?;

        self.logger.debug(&format!(
            "Cart line {} now at quantity {}",
            line.id, line.quantity
        ));
        Ok(line)
    }
}
