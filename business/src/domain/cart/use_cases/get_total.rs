use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::value_objects::CartId;

pub struct GetCartTotalParams {
    pub cart_id: CartId,
}

/// Sum of price x quantity over the cart's lines, computed directly
/// against the store. An empty cart yields zero.
#[async_trait]
pub trait GetCartTotalUseCase: Send + Sync {
    async fn execute(&self, params: GetCartTotalParams) -> Result<BigDecimal, CartError>;
}
