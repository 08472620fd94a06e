use poem_openapi::Object;

use business::domain::pie::model::Pie;

#[derive(Debug, Clone, Object)]
pub struct PieResponse {
    /// Pie unique identifier
    pub id: String,
    /// Pie name
    pub name: String,
    /// One-line description for listings
    pub short_description: String,
    /// Full description for the detail page
    pub long_description: String,
    /// Allergy information
    pub allergy_information: String,
    /// Price as a decimal string, e.g. "15.95"
    pub price: String,
    /// Image URL
    pub image_url: String,
    /// Thumbnail image URL
    pub image_thumbnail_url: String,
    /// Whether this pie is featured this week
    pub is_pie_of_the_week: bool,
    /// Whether this pie is in stock
    pub in_stock: bool,
}

impl From<Pie> for PieResponse {
    fn from(pie: Pie) -> Self {
        Self {
            id: pie.id.to_string(),
            name: pie.name,
            short_description: pie.short_description,
            long_description: pie.long_description,
            allergy_information: pie.allergy_information,
            price: pie.price.to_string(),
            image_url: pie.image_url,
            image_thumbnail_url: pie.image_thumbnail_url,
            is_pie_of_the_week: pie.is_pie_of_the_week,
            in_stock: pie.in_stock,
        }
    }
}
