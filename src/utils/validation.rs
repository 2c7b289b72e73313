//! Validación de campos
//!
//! Validadores custom compartidos por los DTOs de la API.

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::models::vehicle::{FUEL_TYPES, TRANSMISSIONS};

/// Las tarifas son montos monetarios no negativos
pub fn validate_rate(rate: &Decimal) -> Result<(), ValidationError> {
    if rate.is_sign_negative() {
        let mut error = ValidationError::new("negative_rate");
        error.message = Some("Rate must be a non-negative amount".into());
        return Err(error);
    }
    Ok(())
}

pub fn validate_transmission(value: &str) -> Result<(), ValidationError> {
    if !TRANSMISSIONS.contains(&value) {
        let mut error = ValidationError::new("invalid_transmission");
        error.message = Some("Transmission must be 'automatic' or 'manual'".into());
        return Err(error);
    }
    Ok(())
}

pub fn validate_fuel_type(value: &str) -> Result<(), ValidationError> {
    if !FUEL_TYPES.contains(&value) {
        let mut error = ValidationError::new("invalid_fuel_type");
        error.message = Some("Fuel type must be one of petrol, diesel, electric, hybrid".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate(&Decimal::new(5000, 2)).is_ok());
        assert!(validate_rate(&Decimal::ZERO).is_ok());
        assert!(validate_rate(&Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn test_validate_transmission() {
        assert!(validate_transmission("automatic").is_ok());
        assert!(validate_transmission("manual").is_ok());
        assert!(validate_transmission("cvt").is_err());
    }

    #[test]
    fn test_validate_fuel_type() {
        assert!(validate_fuel_type("electric").is_ok());
        assert!(validate_fuel_type("kerosene").is_err());
    }
}
