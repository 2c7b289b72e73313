//! Modelo de Vehicle
//!
//! Mapea exactamente a la tabla `vehicles`. Las tarifas semanal y mensual
//! se almacenan pero el cálculo de precio usa solamente la tarifa diaria.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Valores permitidos para `transmission`
pub const TRANSMISSIONS: [&str; 2] = ["automatic", "manual"];

/// Valores permitidos para `fuel_type`
pub const FUEL_TYPES: [&str; 4] = ["petrol", "diesel", "electric", "hybrid"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
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

impl Vehicle {
    /// Nombre para mostrar: "Toyota Corolla"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.name).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_with_brand() {
        let mut vehicle = test_vehicle();
        vehicle.brand = "Toyota".to_string();
        vehicle.name = "Corolla".to_string();
        assert_eq!(vehicle.display_name(), "Toyota Corolla");
    }

    #[test]
    fn test_display_name_without_brand() {
        let mut vehicle = test_vehicle();
        vehicle.brand = String::new();
        vehicle.name = "Corolla".to_string();
        assert_eq!(vehicle.display_name(), "Corolla");
    }

    pub(crate) fn test_vehicle() -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            name: "Corolla".to_string(),
            brand: "Toyota".to_string(),
            vehicle_type: "Sedan".to_string(),
            year: 2023,
            transmission: "automatic".to_string(),
            fuel_type: "petrol".to_string(),
            mileage_km: 12000,
            seating_capacity: 5,
            daily_rate: Decimal::new(5000, 2),
            weekly_rate: Decimal::new(30000, 2),
            monthly_rate: Decimal::new(110000, 2),
            is_available: true,
            description: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
