//! Routers de la API
//!
//! Un router por recurso, anidados bajo `/api` en `main.rs`.

pub mod auth_routes;
pub mod booking_routes;
pub mod feature_routes;
pub mod vehicle_routes;
