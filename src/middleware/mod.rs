//! Middleware HTTP
//!
//! Autenticación JWT y CORS.

pub mod auth;
pub mod cors;

pub use auth::{auth_middleware, AuthenticatedUser};
pub use cors::cors_middleware;
