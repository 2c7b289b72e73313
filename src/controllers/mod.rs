//! Controllers
//!
//! Orquestación por recurso: validan la request, llaman a repositorios
//! y servicios, y construyen los DTOs de respuesta.

pub mod auth_controller;
pub mod booking_controller;
pub mod feature_controller;
pub mod vehicle_controller;

pub use auth_controller::AuthController;
pub use booking_controller::BookingController;
pub use feature_controller::FeatureController;
pub use vehicle_controller::VehicleController;
