use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::CartId;

use super::model::CartLine;

/// Persistence port for cart lines. `save` must upsert keyed on the
/// (cart_id, pie_id) pair so the one-line-per-pie invariant holds even when
/// two first-adds race. `total` is computed store-side against the catalog
/// price, never from a cached listing.
#[async_trait]
pub trait CartLineRepository: Send + Sync {
    async fn get_all(&self, cart_id: &CartId) -> Result<Vec<CartLine>, RepositoryError>;
    async fn find_by_pie_id(
        &self,
        cart_id: &CartId,
        pie_id: Uuid,
    ) -> Result<Option<CartLine>, RepositoryError>;
    async fn save(&self, line: &CartLine) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn delete_by_cart_id(&self, cart_id: &CartId) -> Result<u64, RepositoryError>;
    async fn total(&self, cart_id: &CartId) -> Result<BigDecimal, RepositoryError>;
}
