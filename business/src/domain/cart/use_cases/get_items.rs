use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::value_objects::CartId;

pub struct GetCartItemsParams {
    pub cart_id: CartId,
}

/// Lists the cart's lines, each resolved with its catalog entry. Always
/// recomputed from the store; callers own any caching they need.
#[async_trait]
pub trait GetCartItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetCartItemsParams) -> Result<Vec<CartItem>, CartError>;
}
