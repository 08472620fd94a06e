use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLine;
use crate::domain::shared::value_objects::CartId;

pub struct AddCartItemParams {
    pub cart_id: CartId,
    pub pie_id: Uuid,
}

/// Adds one unit of a pie to the cart: first add creates a line at
/// quantity 1, every further add increments it. Returns the updated line.
#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartLine, CartError>;
}
