//! PostgreSQL implementation of PropertyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use rental_core::entities::Property;
use rental_core::traits::{PropertyRepository, RepoResult};
use rental_core::value_objects::Snowflake;

use crate::models::PropertyModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PropertyRepository
#[derive(Clone)]
pub struct PgPropertyRepository {
    pool: PgPool,
}

impl PgPropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Property>> {
        let result = sqlx::query_as::<_, PropertyModel>(
            r"
            SELECT id, owner_id, title, rate, created_at, updated_at
            FROM properties
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Property::from))
    }
}
