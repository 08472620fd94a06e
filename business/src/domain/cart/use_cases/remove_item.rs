use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::value_objects::CartId;

pub struct RemoveCartItemParams {
    pub cart_id: CartId,
    pub pie_id: Uuid,
}

/// Removes one unit of a pie from the cart and returns the line's new
/// quantity: 0 when the line was deleted or was never present.
#[async_trait]
pub trait RemoveCartItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<i32, CartError>;
}
