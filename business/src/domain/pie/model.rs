use bigdecimal::BigDecimal;
use uuid::Uuid;

/// Catalog entry. Pies are seeded into the store by migrations and are
/// read-only from the application's perspective, so there is no validating
/// constructor here, only rehydration.
#[derive(Debug, Clone)]
pub struct Pie {
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

pub struct PieProps {
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

impl Pie {
    /// Constructor for data already persisted in the repository.
    pub fn from_repository(props: PieProps) -> Self {
        Self {
            id: props.id,
            name: props.name,
            short_description: props.short_description,
            long_description: props.long_description,
            allergy_information: props.allergy_information,
            price: props.price,
            image_url: props.image_url,
            image_thumbnail_url: props.image_thumbnail_url,
            is_pie_of_the_week: props.is_pie_of_the_week,
            in_stock: props.in_stock,
        }
    }
}
