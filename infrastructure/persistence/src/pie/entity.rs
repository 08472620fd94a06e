use bigdecimal::BigDecimal;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::pie::model::{Pie, PieProps};

#[derive(Debug, FromRow)]
pub struct PieEntity {
    pub id: Uuid,
    pub name: String,
    pub short_description: String,
    pub long_description: String,
    pub allergy_information: String,
    pub price: BigDecimal,
    pub image_url: String,
    pub image_thumbnail_url: String,
    pub is_pie_of_the_week: bool,
    pub in_stock: bool,
}

impl PieEntity {
    pub fn into_domain(self) -> Pie {
        Pie::from_repository(PieProps {
            id: self.id,
            name: self.name,
            short_description: self.short_description,
            long_description: self.long_description,
            allergy_information: self.allergy_information,
            price: self.price,
            image_url: self.image_url,
            image_thumbnail_url: self.image_thumbnail_url,
            is_pie_of_the_week: self.is_pie_of_the_week,
            in_stock: self.in_stock,
        })
    }
}
