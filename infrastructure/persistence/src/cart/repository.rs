use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::cart::model::CartLine;
use business::domain::cart::repository::CartLineRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::CartId;

use super::entity::CartLineEntity;

pub struct CartLineRepositoryPostgres {
    pool: PgPool,
}

impl CartLineRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartLineRepository for CartLineRepositoryPostgres {
    async fn get_all(&self, cart_id: &CartId) -> Result<Vec<CartLine>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartLineEntity>(
            "SELECT id, cart_id, pie_id, quantity, created_at, updated_at FROM cart_lines WHERE cart_id = $1 ORDER BY created_at",
        )
        .bind(cart_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_pie_id(
        &self,
        cart_id: &CartId,
        pie_id: Uuid,
    ) -> Result<Option<CartLine>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartLineEntity>(
            "SELECT id, cart_id, pie_id, quantity, created_at, updated_at FROM cart_lines WHERE cart_id = $1 AND pie_id = $2",
        )
        .bind(cart_id.as_str())
        .bind(pie_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    // Upsert keyed on the (cart_id, pie_id) pair: two requests racing on the
    // first add of a pie collapse into the same row instead of violating the
    // one-line-per-pie invariant.
    async fn save(&self, line: &CartLine) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO cart_lines (id, cart_id, pie_id, quantity, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (cart_id, pie_id) DO UPDATE SET
                quantity = EXCLUDED.quantity,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(line.id)
        .bind(line.cart_id.as_str())
        .bind(line.pie_id)
        .bind(line.quantity)
        .bind(line.created_at)
        .bind(line.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_lines WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete_by_cart_id(&self, cart_id: &CartId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_lines WHERE cart_id = $1")
            .bind(cart_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }

    async fn total(&self, cart_id: &CartId) -> Result<BigDecimal, RepositoryError> {
        let total = sqlx::query_scalar::<_, BigDecimal>(
            "SELECT COALESCE(SUM(p.price * l.quantity), 0) FROM cart_lines l JOIN pies p ON p.id = l.pie_id WHERE l.cart_id = $1",
        )
        .bind(cart_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(total)
    }
}
