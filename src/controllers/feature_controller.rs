use sqlx::PgPool;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::feature_dto::CreateFeatureRequest;
use crate::models::Feature;
use crate::repositories::FeatureRepository;
use crate::utils::errors::AppError;

pub struct FeatureController {
    repository: FeatureRepository,
}

impl FeatureController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FeatureRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateFeatureRequest,
    ) -> Result<ApiResponse<Feature>, AppError> {
        request.validate()?;

        let feature = self.repository.create(request.name).await?;
        Ok(ApiResponse::success(feature))
    }

    pub async fn list(&self) -> Result<Vec<Feature>, AppError> {
        self.repository.list().await
    }
}
