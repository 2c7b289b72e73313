//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y validación
//! de campos compartida por los DTOs.

pub mod errors;
pub mod validation;
