//! Motor de validez y tarificación de reservas
//!
//! Decide si una reserva candidata puede crearse y, en ese caso, calcula su
//! precio. Es una función de decisión pura sobre los datos que recibe: no
//! escribe nada; la persistencia es responsabilidad del caller
//! (`BookingRepository::create_checked`).
//!
//! Reglas, en orden:
//!   1. `end_date >= start_date`, si no → `InvalidDateRange`.
//!   2. Ninguna reserva activa (pending/confirmed/completed) del mismo
//!      vehículo solapa el rango pedido, extremos inclusive, si no →
//!      `DateRangeUnavailable`. Las canceladas nunca cuentan.
//!   3. Precio: `num_days * daily_rate`, con ambos extremos inclusive
//!      (una reserva de un solo día son 1 día). Las tarifas semanal y
//!      mensual existen en el vehículo pero no participan del cálculo.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Booking, BookingStatus, Vehicle};
use crate::repositories::{BookingRepository, VehicleRepository};
use crate::utils::errors::{not_found_error, AppError};

/// Motivos de rechazo de una reserva candidata. Ambos son errores de
/// entrada corregibles por el usuario, no fallos del sistema.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("End date must not precede start date")]
    InvalidDateRange,

    #[error("Vehicle is not available for the selected dates")]
    DateRangeUnavailable,
}

/// Resultado de una validación exitosa: reserva tarificada, aún sin persistir
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedBooking {
    pub vehicle_id: Uuid,
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_amount: Decimal,
    pub status: BookingStatus,
}

/// Solapamiento inclusivo: `[a,b]` y `[c,d]` se solapan sii `a <= d && c <= b`.
/// Un día de frontera compartido cuenta como solapamiento.
pub fn ranges_overlap(a: NaiveDate, b: NaiveDate, c: NaiveDate, d: NaiveDate) -> bool {
    a <= d && c <= b
}

/// Días de la reserva, ambos extremos inclusive
pub fn num_days(start_date: NaiveDate, end_date: NaiveDate) -> i64 {
    (end_date - start_date).num_days() + 1
}

/// Núcleo puro del motor: decide sobre la reserva candidata dados el vehículo
/// y las reservas existentes de ese vehículo. El requester llega siempre como
/// parámetro explícito, nunca de contexto ambiente.
pub fn evaluate(
    vehicle: &Vehicle,
    user_id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
    existing: &[Booking],
) -> Result<PricedBooking, RejectionReason> {
    if end_date < start_date {
        return Err(RejectionReason::InvalidDateRange);
    }

    let conflict = existing.iter().any(|booking| {
        booking.is_active()
            && ranges_overlap(booking.start_date, booking.end_date, start_date, end_date)
    });
    if conflict {
        return Err(RejectionReason::DateRangeUnavailable);
    }

    let days = num_days(start_date, end_date);
    let total_amount = Decimal::from(days) * vehicle.daily_rate;

    Ok(PricedBooking {
        vehicle_id: vehicle.id,
        user_id,
        start_date,
        end_date,
        total_amount,
        status: BookingStatus::Pending,
    })
}

/// Fachada del motor sobre los repositorios: carga el vehículo y sus
/// reservas en conflicto y delega la decisión en [`evaluate`]
pub struct BookingEngine {
    vehicles: VehicleRepository,
    bookings: BookingRepository,
}

impl BookingEngine {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool),
        }
    }

    /// Valida y tarifica una reserva candidata. Solo lectura: los fallos del
    /// store se propagan tal cual y los rechazos llegan como `AppError::Booking`.
    pub async fn validate_and_price(
        &self,
        vehicle_id: Uuid,
        user_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PricedBooking, AppError> {
        if end_date < start_date {
            return Err(RejectionReason::InvalidDateRange.into());
        }

        let vehicle = self
            .vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &vehicle_id.to_string()))?;

        let existing = self
            .bookings
            .find_conflicting(vehicle_id, start_date, end_date, &BookingStatus::ACTIVE)
            .await?;

        let priced = evaluate(&vehicle, user_id, start_date, end_date, &existing)?;
        Ok(priced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn vehicle_with_daily_rate(daily_rate: Decimal) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            name: "Corolla".to_string(),
            brand: "Toyota".to_string(),
            vehicle_type: "Sedan".to_string(),
            year: 2023,
            transmission: "automatic".to_string(),
            fuel_type: "petrol".to_string(),
            mileage_km: 12000,
            seating_capacity: 5,
            daily_rate,
            weekly_rate: Decimal::new(30000, 2),
            monthly_rate: Decimal::new(110000, 2),
            is_available: true,
            description: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn booking_on(vehicle: &Vehicle, start: NaiveDate, end: NaiveDate, status: &str) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            vehicle_id: vehicle.id,
            start_date: start,
            end_date: end,
            total_amount: Decimal::ZERO,
            status: status.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_ranges_overlap_inclusive() {
        let a = date(2024, 3, 1);
        let b = date(2024, 3, 5);
        // Contenido, parcial y frontera compartida
        assert!(ranges_overlap(a, b, date(2024, 3, 2), date(2024, 3, 4)));
        assert!(ranges_overlap(a, b, date(2024, 3, 4), date(2024, 3, 10)));
        assert!(ranges_overlap(a, b, date(2024, 3, 5), date(2024, 3, 9)));
        assert!(ranges_overlap(a, b, date(2024, 2, 20), date(2024, 3, 1)));
        // Disjuntos por ambos lados
        assert!(!ranges_overlap(a, b, date(2024, 3, 6), date(2024, 3, 9)));
        assert!(!ranges_overlap(a, b, date(2024, 2, 20), date(2024, 2, 29)));
    }

    #[test]
    fn test_num_days_single_day_is_one() {
        let day = date(2024, 3, 1);
        assert_eq!(num_days(day, day), 1);
        assert_eq!(num_days(date(2024, 3, 1), date(2024, 3, 3)), 3);
    }

    // Escenario A: daily_rate 50.00, del 01/03 al 03/03 → 150.00 (3 días)
    #[test]
    fn test_accepted_booking_priced_by_daily_rate() {
        let vehicle = vehicle_with_daily_rate(Decimal::new(5000, 2));
        let priced = evaluate(
            &vehicle,
            Uuid::new_v4(),
            date(2024, 3, 1),
            date(2024, 3, 3),
            &[],
        )
        .unwrap();

        assert_eq!(priced.total_amount, Decimal::new(15000, 2));
        assert_eq!(priced.status, BookingStatus::Pending);
        assert_eq!(priced.vehicle_id, vehicle.id);
    }

    // Escenario B: reserva confirmada [01/03, 05/03], petición [04/03, 06/03]
    #[test]
    fn test_rejects_partial_overlap_with_confirmed() {
        let vehicle = vehicle_with_daily_rate(Decimal::new(5000, 2));
        let existing = vec![booking_on(
            &vehicle,
            date(2024, 3, 1),
            date(2024, 3, 5),
            "confirmed",
        )];

        let result = evaluate(
            &vehicle,
            Uuid::new_v4(),
            date(2024, 3, 4),
            date(2024, 3, 6),
            &existing,
        );
        assert_eq!(result, Err(RejectionReason::DateRangeUnavailable));
    }

    // Escenario C: la misma ventana de una reserva cancelada se acepta
    #[test]
    fn test_cancelled_booking_never_conflicts() {
        let vehicle = vehicle_with_daily_rate(Decimal::new(5000, 2));
        let existing = vec![booking_on(
            &vehicle,
            date(2024, 3, 1),
            date(2024, 3, 5),
            "cancelled",
        )];

        let result = evaluate(
            &vehicle,
            Uuid::new_v4(),
            date(2024, 3, 2),
            date(2024, 3, 4),
            &existing,
        );
        assert!(result.is_ok());
    }

    // Escenario D: inicio posterior al fin, con y sin historial
    #[test]
    fn test_rejects_inverted_range_regardless_of_history() {
        let vehicle = vehicle_with_daily_rate(Decimal::new(5000, 2));
        let result = evaluate(
            &vehicle,
            Uuid::new_v4(),
            date(2024, 3, 10),
            date(2024, 3, 5),
            &[],
        );
        assert_eq!(result, Err(RejectionReason::InvalidDateRange));

        // El chequeo de fechas va antes que el de disponibilidad
        let existing = vec![booking_on(
            &vehicle,
            date(2024, 3, 1),
            date(2024, 3, 31),
            "confirmed",
        )];
        let result = evaluate(
            &vehicle,
            Uuid::new_v4(),
            date(2024, 3, 10),
            date(2024, 3, 5),
            &existing,
        );
        assert_eq!(result, Err(RejectionReason::InvalidDateRange));
    }

    // Escenario E: reservas pegadas comparten el día frontera → conflicto
    #[test]
    fn test_back_to_back_shared_boundary_day_rejected() {
        let vehicle = vehicle_with_daily_rate(Decimal::new(5000, 2));
        let existing = vec![booking_on(
            &vehicle,
            date(2024, 3, 1),
            date(2024, 3, 3),
            "pending",
        )];

        let result = evaluate(
            &vehicle,
            Uuid::new_v4(),
            date(2024, 3, 3),
            date(2024, 3, 5),
            &existing,
        );
        assert_eq!(result, Err(RejectionReason::DateRangeUnavailable));
    }

    #[test]
    fn test_disjoint_range_accepted_despite_existing_bookings() {
        let vehicle = vehicle_with_daily_rate(Decimal::new(5000, 2));
        let existing = vec![
            booking_on(&vehicle, date(2024, 3, 1), date(2024, 3, 5), "pending"),
            booking_on(&vehicle, date(2024, 3, 20), date(2024, 3, 25), "completed"),
        ];

        // Hueco entre ambas reservas, sin tocar fronteras
        let result = evaluate(
            &vehicle,
            Uuid::new_v4(),
            date(2024, 3, 6),
            date(2024, 3, 19),
            &existing,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_completed_booking_still_blocks() {
        let vehicle = vehicle_with_daily_rate(Decimal::new(5000, 2));
        let existing = vec![booking_on(
            &vehicle,
            date(2024, 3, 1),
            date(2024, 3, 5),
            "completed",
        )];

        let result = evaluate(
            &vehicle,
            Uuid::new_v4(),
            date(2024, 3, 5),
            date(2024, 3, 7),
            &existing,
        );
        assert_eq!(result, Err(RejectionReason::DateRangeUnavailable));
    }

    #[test]
    fn test_single_day_booking_priced_one_day() {
        let vehicle = vehicle_with_daily_rate(Decimal::new(7550, 2));
        let day = date(2024, 3, 15);
        let priced = evaluate(&vehicle, Uuid::new_v4(), day, day, &[]).unwrap();
        assert_eq!(priced.total_amount, Decimal::new(7550, 2));
    }

    // Misma entrada, mismo resultado: el motor no tiene efectos secundarios
    #[test]
    fn test_evaluate_is_idempotent() {
        let vehicle = vehicle_with_daily_rate(Decimal::new(5000, 2));
        let user_id = Uuid::new_v4();
        let existing = vec![booking_on(
            &vehicle,
            date(2024, 4, 1),
            date(2024, 4, 3),
            "confirmed",
        )];

        let first = evaluate(&vehicle, user_id, date(2024, 3, 1), date(2024, 3, 3), &existing);
        let second = evaluate(&vehicle, user_id, date(2024, 3, 1), date(2024, 3, 3), &existing);
        assert_eq!(first, second);

        let first = evaluate(&vehicle, user_id, date(2024, 4, 2), date(2024, 4, 5), &existing);
        let second = evaluate(&vehicle, user_id, date(2024, 4, 2), date(2024, 4, 5), &existing);
        assert_eq!(first, second);
    }

    // Las tarifas semanal y mensual no participan del precio
    #[test]
    fn test_weekly_and_monthly_rates_ignored_by_pricing() {
        let mut vehicle = vehicle_with_daily_rate(Decimal::new(5000, 2));
        vehicle.weekly_rate = Decimal::new(100, 2);
        vehicle.monthly_rate = Decimal::new(100, 2);

        // 14 días: un cálculo por tramos usaría la tarifa semanal; aquí no
        let priced = evaluate(
            &vehicle,
            Uuid::new_v4(),
            date(2024, 3, 1),
            date(2024, 3, 14),
            &[],
        )
        .unwrap();
        assert_eq!(priced.total_amount, Decimal::from(14) * Decimal::new(5000, 2));
    }
}
