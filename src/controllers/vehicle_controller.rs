use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, SetVehicleFeaturesRequest, UpdateVehicleRequest, VehicleDetailResponse,
    VehicleResponse,
};
use crate::repositories::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let vehicle = self.repository.create(request).await?;
        log::info!("Vehículo creado: {} ({})", vehicle.display_name(), vehicle.id);

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    /// Detalle del vehículo con sus features e imágenes
    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleDetailResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        let features = self.repository.features_of(id).await?;
        let images = self.repository.images_of(id).await?;

        Ok(VehicleDetailResponse {
            vehicle: vehicle.into(),
            features,
            images,
        })
    }

    pub async fn list_available(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.list_available(query).await?;
        Ok(vehicles.into_iter().map(Into::into).collect())
    }

    pub async fn list_latest(&self) -> Result<Vec<VehicleResponse>, AppError> {
        // Portada: los seis vehículos más recientes
        let vehicles = self.repository.list_latest(6).await?;
        Ok(vehicles.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let vehicle = self.repository.update(id, request).await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        log::info!("Vehículo eliminado: {}", id);
        Ok(())
    }

    pub async fn set_features(
        &self,
        id: Uuid,
        request: SetVehicleFeaturesRequest,
    ) -> Result<ApiResponse<VehicleDetailResponse>, AppError> {
        // El vehículo debe existir antes de tocar la relación
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        self.repository.set_features(id, &request.feature_ids).await?;

        let detail = self.get_by_id(id).await?;
        Ok(ApiResponse::success(detail))
    }
}
