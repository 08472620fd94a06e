use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartLineRepository;
use crate::domain::cart::use_cases::get_items::{GetCartItemsParams, GetCartItemsUseCase};
use crate::domain::logger::Logger;
use crate::domain::pie::repository::PieRepository;

pub struct GetCartItemsUseCaseImpl {
    pub cart_repository: Arc<dyn CartLineRepository>,
    pub pie_repository: Arc<dyn PieRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartItemsUseCase for GetCartItemsUseCaseImpl {
    async fn execute(&self, params: GetCartItemsParams) -> Result<Vec<CartItem>, CartError> {
        self.logger
            .info(&format!("Listing items of cart {}", params.cart_id));

        let lines = self.cart_repository.get_all(&params.cart_id).await?;

        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            let pie = self.pie_repository.get_by_id(line.pie_id).await?;
            items.push(CartItem { line, pie });
        }

        self.logger
            .info(&format!("Cart holds {} distinct pies", items.len()));
        Ok(items)
    }
}
