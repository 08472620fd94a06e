use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::{CartItem, CartLine};

use crate::api::pie::dto::PieResponse;

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Identifier of the pie to add one unit of
    pub pie_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    /// Cart line unique identifier
    pub id: String,
    /// Identifier of the pie this line holds
    pub pie_id: String,
    /// Units of the pie in the cart
    pub quantity: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            id: line.id.to_string(),
            pie_id: line.pie_id.to_string(),
            quantity: line.quantity,
            created_at: line.created_at,
            updated_at: line.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// The resolved catalog entry
    pub pie: PieResponse,
    /// Units of the pie in the cart
    pub quantity: i32,
    /// Price times quantity as a decimal string
    pub line_total: String,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        let line_total = item.line_total().to_string();
        Self {
            pie: item.pie.into(),
            quantity: item.line.quantity,
            line_total,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// One entry per distinct pie in the cart
    pub items: Vec<CartItemResponse>,
    /// Cart total as a decimal string; "0" for an empty cart
    pub total: String,
}

#[derive(Debug, Clone, Object)]
pub struct RemovedQuantityResponse {
    /// The line's quantity after removal; 0 when the line is gone
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
pub struct ClearedCartResponse {
    /// Number of cart lines removed
    pub count: u64,
}
