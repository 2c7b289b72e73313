//! Repositorio de features (etiquetas de equipamiento)

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Feature;
use crate::utils::errors::{conflict_error, AppError};

pub struct FeatureRepository {
    pool: PgPool,
}

impl FeatureRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: String) -> Result<Feature, AppError> {
        let feature = sqlx::query_as::<_, Feature>(
            "INSERT INTO features (id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                conflict_error("Feature", "name", &name)
            }
            _ => AppError::Database(e),
        })?;

        Ok(feature)
    }

    pub async fn list(&self) -> Result<Vec<Feature>, AppError> {
        let features = sqlx::query_as::<_, Feature>("SELECT * FROM features ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(features)
    }
}
