use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::value_objects::CartId;

pub struct ClearCartParams {
    pub cart_id: CartId,
}

/// Deletes every line of the cart in one bulk operation and returns how
/// many were removed. Clearing an empty cart is a no-op, not an error.
#[async_trait]
pub trait ClearCartUseCase: Send + Sync {
    async fn execute(&self, params: ClearCartParams) -> Result<u64, CartError>;
}
