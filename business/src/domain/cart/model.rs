use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::pie::model::Pie;
use crate::domain::shared::value_objects::CartId;

/// One distinct pie within one visitor's cart. At most one line exists per
/// (cart_id, pie_id) pair; a line whose quantity reaches zero is deleted,
/// never persisted at zero.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub id: Uuid,
    pub cart_id: CartId,
    pub pie_id: Uuid,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartLine {
    /// A fresh line always starts at quantity 1.
    pub fn new(cart_id: CartId, pie_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            cart_id,
            pie_id,
            quantity: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        cart_id: CartId,
        pie_id: Uuid,
        quantity: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            cart_id,
            pie_id,
            quantity,
            created_at,
            updated_at,
        }
    }

    pub fn increment(&mut self) {
        self.quantity += 1;
        self.updated_at = Utc::now();
    }

    /// Caller must delete the line instead of decrementing when quantity is 1.
    pub fn decrement(&mut self) {
        debug_assert!(self.quantity > 1);
        self.quantity -= 1;
        self.updated_at = Utc::now();
    }
}

/// A cart line resolved with its catalog entry, as returned to callers
/// listing a cart.
#[derive(Debug, Clone)]
pub struct CartItem {
    pub line: CartLine,
    pub pie: Pie,
}

impl CartItem {
    pub fn line_total(&self) -> BigDecimal {
        &self.pie.price * BigDecimal::from(self.line.quantity)
    }
}
