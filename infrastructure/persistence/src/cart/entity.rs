use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::CartLine;
use business::domain::shared::value_objects::CartId;

#[derive(Debug, FromRow)]
pub struct CartLineEntity {
    pub id: Uuid,
    pub cart_id: String,
    pub pie_id: Uuid,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartLineEntity {
    pub fn into_domain(self) -> CartLine {
        CartLine::from_repository(
            self.id,
            CartId::new(self.cart_id),
            self.pie_id,
            self.quantity,
            self.created_at,
            self.updated_at,
        )
    }
}
