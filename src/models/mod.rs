//! Modelos del dominio
//!
//! Structs que mapean directamente a las tablas de PostgreSQL
//! más los enums de dominio (estado de reserva, transmisión, combustible).

pub mod booking;
pub mod feature;
pub mod user;
pub mod vehicle;

pub use booking::{Booking, BookingStatus};
pub use feature::{Feature, VehicleImage};
pub use user::User;
pub use vehicle::Vehicle;
