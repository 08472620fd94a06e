use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::pie::model::Pie;
use business::domain::pie::repository::PieRepository;

use super::entity::PieEntity;

pub struct PieRepositoryPostgres {
    pool: PgPool,
}

impl PieRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PieRepository for PieRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Pie>, RepositoryError> {
        let entities = sqlx::query_as::<_, PieEntity>(
            "SELECT id, name, short_description, long_description, allergy_information, price, image_url, image_thumbnail_url, is_pie_of_the_week, in_stock FROM pies ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Pie, RepositoryError> {
        let entity = sqlx::query_as::<_, PieEntity>(
            "SELECT id, name, short_description, long_description, allergy_information, price, image_url, image_thumbnail_url, is_pie_of_the_week, in_stock FROM pies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_pies_of_the_week(&self) -> Result<Vec<Pie>, RepositoryError> {
        let entities = sqlx::query_as::<_, PieEntity>(
            "SELECT id, name, short_description, long_description, allergy_information, price, image_url, image_thumbnail_url, is_pie_of_the_week, in_stock FROM pies WHERE is_pie_of_the_week = TRUE ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
