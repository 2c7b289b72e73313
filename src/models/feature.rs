//! Modelos de Feature y VehicleImage
//!
//! Las features son etiquetas únicas con ciclo de vida propio; las imágenes
//! pertenecen a su vehículo (cascade). La subida de ficheros queda fuera de
//! este servicio, `image_path` es una referencia opaca.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Feature {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleImage {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub image_path: String,
}
