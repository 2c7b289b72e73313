//! Repositorios de acceso a datos
//!
//! Queries sqlx en runtime (sin macros compile-time), un repositorio
//! por agregado.

pub mod booking_repository;
pub mod feature_repository;
pub mod user_repository;
pub mod vehicle_repository;

pub use booking_repository::BookingRepository;
pub use feature_repository::FeatureRepository;
pub use user_repository::UserRepository;
pub use vehicle_repository::VehicleRepository;
