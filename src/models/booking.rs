//! Modelo de Booking
//!
//! Una reserva referencia exactamente un vehículo y un usuario. El monto
//! total siempre lo deriva el motor de reservas, nunca lo fija el caller.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Estado de una reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// Estados que cuentan como conflicto de disponibilidad.
    /// Una reserva cancelada nunca bloquea fechas.
    pub const ACTIVE: [BookingStatus; 3] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "completed" => Ok(BookingStatus::Completed),
            other => Err(format!("Estado de reserva desconocido: '{}'", other)),
        }
    }
}

/// Booking - mapea exactamente a la tabla `bookings`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn status(&self) -> Option<BookingStatus> {
        self.status.parse().ok()
    }

    /// La columna `status` está restringida por CHECK a los cuatro valores;
    /// un valor no parseable se trata como no-activo.
    pub fn is_active(&self) -> bool {
        self.status().map(|s| s.is_active()).unwrap_or(false)
    }

    /// Días de la reserva, ambos extremos inclusive (un solo día = 1)
    pub fn num_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
            BookingStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<BookingStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_status_parse_unknown() {
        assert!("archived".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_cancelled_is_not_active() {
        assert!(!BookingStatus::Cancelled.is_active());
        assert!(BookingStatus::Pending.is_active());
        assert!(BookingStatus::Confirmed.is_active());
        assert!(BookingStatus::Completed.is_active());
        assert!(!BookingStatus::ACTIVE.contains(&BookingStatus::Cancelled));
    }

    #[test]
    fn test_num_days_inclusive() {
        let booking = Booking {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            total_amount: Decimal::ZERO,
            status: "pending".to_string(),
            created_at: Utc::now(),
        };
        assert_eq!(booking.num_days(), 3);
    }
}
