//! Servicios de la aplicación
//!
//! Aquí vive el motor de validez y tarificación de reservas (el núcleo
//! del sistema) y el servicio JWT.

pub mod booking_engine;
pub mod jwt_service;

pub use booking_engine::BookingEngine;
pub use jwt_service::JwtService;
