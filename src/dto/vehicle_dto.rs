use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Feature, Vehicle, VehicleImage};

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 150))]
    pub name: String,

    #[validate(length(max = 100))]
    #[serde(default)]
    pub brand: String,

    #[serde(default = "default_vehicle_type")]
    pub vehicle_type: String,

    #[validate(range(min = 1950, max = 2100))]
    #[serde(default = "default_year")]
    pub year: i32,

    #[validate(custom = "crate::utils::validation::validate_transmission")]
    #[serde(default = "default_transmission")]
    pub transmission: String,

    #[validate(custom = "crate::utils::validation::validate_fuel_type")]
    #[serde(default = "default_fuel_type")]
    pub fuel_type: String,

    #[validate(range(min = 0))]
    #[serde(default)]
    pub mileage_km: i32,

    #[validate(range(min = 1, max = 50))]
    #[serde(default = "default_seating_capacity")]
    pub seating_capacity: i16,

    #[validate(custom = "crate::utils::validation::validate_rate")]
    pub daily_rate: Decimal,

    #[validate(custom = "crate::utils::validation::validate_rate")]
    pub weekly_rate: Decimal,

    #[validate(custom = "crate::utils::validation::validate_rate")]
    pub monthly_rate: Decimal,

    #[serde(default)]
    pub description: String,
}

fn default_vehicle_type() -> String {
    "Sedan".to_string()
}

fn default_year() -> i32 {
    2023
}

fn default_transmission() -> String {
    "automatic".to_string()
}

fn default_fuel_type() -> String {
    "petrol".to_string()
}

fn default_seating_capacity() -> i16 {
    5
}

// Request para actualizar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 150))]
    pub name: Option<String>,

    #[validate(length(max = 100))]
    pub brand: Option<String>,

    pub vehicle_type: Option<String>,

    #[validate(range(min = 1950, max = 2100))]
    pub year: Option<i32>,

    #[validate(custom = "crate::utils::validation::validate_transmission")]
    pub transmission: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_fuel_type")]
    pub fuel_type: Option<String>,

    #[validate(range(min = 0))]
    pub mileage_km: Option<i32>,

    #[validate(range(min = 1, max = 50))]
    pub seating_capacity: Option<i16>,

    #[validate(custom = "crate::utils::validation::validate_rate")]
    pub daily_rate: Option<Decimal>,

    #[validate(custom = "crate::utils::validation::validate_rate")]
    pub weekly_rate: Option<Decimal>,

    #[validate(custom = "crate::utils::validation::validate_rate")]
    pub monthly_rate: Option<Decimal>,

    pub is_available: Option<bool>,

    pub description: Option<String>,
}

// Request para reemplazar las features de un vehículo
#[derive(Debug, Deserialize)]
pub struct SetVehicleFeaturesRequest {
    pub feature_ids: Vec<Uuid>,
}

// Query params de búsqueda del catálogo
#[derive(Debug, Deserialize)]
pub struct VehicleSearchQuery {
    pub q: Option<String>,
}

// Response de vehículo para listados
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub vehicle_type: String,
    pub year: i32,
    pub transmission: String,
    pub fuel_type: String,
    pub mileage_km: i32,
    pub seating_capacity: i16,
    pub daily_rate: Decimal,
    pub weekly_rate: Decimal,
    pub monthly_rate: Decimal,
    pub is_available: bool,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(v: Vehicle) -> Self {
        Self {
            id: v.id,
            name: v.name,
            brand: v.brand,
            vehicle_type: v.vehicle_type,
            year: v.year,
            transmission: v.transmission,
            fuel_type: v.fuel_type,
            mileage_km: v.mileage_km,
            seating_capacity: v.seating_capacity,
            daily_rate: v.daily_rate,
            weekly_rate: v.weekly_rate,
            monthly_rate: v.monthly_rate,
            is_available: v.is_available,
            description: v.description,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

// Response de detalle: vehículo + features + imágenes
#[derive(Debug, Serialize)]
pub struct VehicleDetailResponse {
    #[serde(flatten)]
    pub vehicle: VehicleResponse,
    pub features: Vec<Feature>,
    pub images: Vec<VehicleImage>,
}
