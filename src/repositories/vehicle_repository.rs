//! Repositorio del catálogo de vehículos

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::{Feature, Vehicle, VehicleImage};
use crate::utils::errors::{not_found_error, AppError};

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<Vehicle, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                id, name, brand, vehicle_type, year, transmission, fuel_type,
                mileage_km, seating_capacity, daily_rate, weekly_rate, monthly_rate,
                is_available, description, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, TRUE, $13, $14, $14)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.name)
        .bind(request.brand)
        .bind(request.vehicle_type)
        .bind(request.year)
        .bind(request.transmission)
        .bind(request.fuel_type)
        .bind(request.mileage_km)
        .bind(request.seating_capacity)
        .bind(request.daily_rate)
        .bind(request.weekly_rate)
        .bind(request.monthly_rate)
        .bind(request.description)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    /// Catálogo visible: vehículos disponibles, con búsqueda opcional por
    /// nombre, marca o tipo
    pub async fn list_available(&self, query: Option<&str>) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = match query {
            Some(q) if !q.trim().is_empty() => {
                let pattern = format!("%{}%", q.trim());
                sqlx::query_as::<_, Vehicle>(
                    r#"
                    SELECT * FROM vehicles
                    WHERE is_available = TRUE
                      AND (name ILIKE $1 OR brand ILIKE $1 OR vehicle_type ILIKE $1)
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?
            }
            _ => {
                sqlx::query_as::<_, Vehicle>(
                    "SELECT * FROM vehicles WHERE is_available = TRUE ORDER BY created_at DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(vehicles)
    }

    /// Los últimos vehículos dados de alta (portada)
    pub async fn list_latest(&self, limit: i64) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn update(&self, id: Uuid, request: UpdateVehicleRequest) -> Result<Vehicle, AppError> {
        // Obtener vehículo actual para campos no enviados
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET name = $2, brand = $3, vehicle_type = $4, year = $5, transmission = $6,
                fuel_type = $7, mileage_km = $8, seating_capacity = $9, daily_rate = $10,
                weekly_rate = $11, monthly_rate = $12, is_available = $13, description = $14,
                updated_at = $15
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.name.unwrap_or(current.name))
        .bind(request.brand.unwrap_or(current.brand))
        .bind(request.vehicle_type.unwrap_or(current.vehicle_type))
        .bind(request.year.unwrap_or(current.year))
        .bind(request.transmission.unwrap_or(current.transmission))
        .bind(request.fuel_type.unwrap_or(current.fuel_type))
        .bind(request.mileage_km.unwrap_or(current.mileage_km))
        .bind(request.seating_capacity.unwrap_or(current.seating_capacity))
        .bind(request.daily_rate.unwrap_or(current.daily_rate))
        .bind(request.weekly_rate.unwrap_or(current.weekly_rate))
        .bind(request.monthly_rate.unwrap_or(current.monthly_rate))
        .bind(request.is_available.unwrap_or(current.is_available))
        .bind(request.description.unwrap_or(current.description))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Borra el vehículo; imágenes, relaciones con features y reservas
    /// caen en cascada
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Vehicle", &id.to_string()));
        }

        Ok(())
    }

    pub async fn features_of(&self, vehicle_id: Uuid) -> Result<Vec<Feature>, AppError> {
        let features = sqlx::query_as::<_, Feature>(
            r#"
            SELECT f.id, f.name
            FROM features f
            JOIN vehicle_features vf ON vf.feature_id = f.id
            WHERE vf.vehicle_id = $1
            ORDER BY f.name
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(features)
    }

    pub async fn images_of(&self, vehicle_id: Uuid) -> Result<Vec<VehicleImage>, AppError> {
        let images = sqlx::query_as::<_, VehicleImage>(
            "SELECT * FROM vehicle_images WHERE vehicle_id = $1 ORDER BY id",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(images)
    }

    /// Reemplaza el conjunto completo de features del vehículo
    pub async fn set_features(&self, vehicle_id: Uuid, feature_ids: &[Uuid]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM vehicle_features WHERE vehicle_id = $1")
            .bind(vehicle_id)
            .execute(&mut *tx)
            .await?;

        for feature_id in feature_ids {
            sqlx::query("INSERT INTO vehicle_features (vehicle_id, feature_id) VALUES ($1, $2)")
                .bind(vehicle_id)
                .bind(feature_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
