//! DTOs de la API
//!
//! Requests y responses serializables, separados de los modelos de tabla.

pub mod auth_dto;
pub mod booking_dto;
pub mod feature_dto;
pub mod vehicle_dto;

pub use auth_dto::ApiResponse;
