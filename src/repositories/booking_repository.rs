//! Repositorio de reservas
//!
//! La consulta de conflictos usa solapamiento inclusivo de rangos de fechas:
//! `[a,b]` y `[c,d]` se solapan sii `a <= d AND c <= b`. Un día de frontera
//! compartido cuenta como conflicto.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Booking, BookingStatus};
use crate::services::booking_engine::{PricedBooking, RejectionReason};
use crate::utils::errors::{not_found_error, AppError};

/// Fila de reserva con el resumen del vehículo (dashboard del usuario)
#[derive(Debug, sqlx::FromRow)]
pub struct BookingWithVehicle {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub vehicle_name: String,
    pub vehicle_brand: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_amount: Decimal,
    pub status: String,
    pub created_at: chrono::DateTime<Utc>,
}

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Reservas del vehículo cuyo estado está en `statuses` y cuyo rango
    /// intersecta `[start_date, end_date]` (extremos inclusive)
    pub async fn find_conflicting(
        &self,
        vehicle_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        statuses: &[BookingStatus],
    ) -> Result<Vec<Booking>, AppError> {
        let statuses: Vec<String> = statuses.iter().map(|s| s.as_str().to_string()).collect();

        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT * FROM bookings
            WHERE vehicle_id = $1
              AND status = ANY($2)
              AND start_date <= $3
              AND end_date >= $4
            ORDER BY start_date
            "#,
        )
        .bind(vehicle_id)
        .bind(statuses)
        .bind(end_date)
        .bind(start_date)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    /// Persiste una reserva ya validada y tarificada por el motor.
    ///
    /// El chequeo de solapamiento se repite dentro de la misma transacción,
    /// serializado por un advisory lock por vehículo: dos peticiones
    /// concurrentes sobre el mismo vehículo no pueden pasar ambas el chequeo
    /// e insertar rangos solapados (cierra la carrera check-then-insert).
    pub async fn create_checked(&self, priced: &PricedBooking) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1::text))")
            .bind(priced.vehicle_id)
            .execute(&mut *tx)
            .await?;

        let active: Vec<String> = BookingStatus::ACTIVE
            .iter()
            .map(|s| s.as_str().to_string())
            .collect();

        let (conflict,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM bookings
                WHERE vehicle_id = $1
                  AND status = ANY($2)
                  AND start_date <= $3
                  AND end_date >= $4
            )
            "#,
        )
        .bind(priced.vehicle_id)
        .bind(active)
        .bind(priced.end_date)
        .bind(priced.start_date)
        .fetch_one(&mut *tx)
        .await?;

        if conflict {
            return Err(RejectionReason::DateRangeUnavailable.into());
        }

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (id, user_id, vehicle_id, start_date, end_date, total_amount, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(priced.user_id)
        .bind(priced.vehicle_id)
        .bind(priced.start_date)
        .bind(priced.end_date)
        .bind(priced.total_amount)
        .bind(priced.status.as_str())
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        log::info!(
            "Reserva {} creada: vehículo {} del {} al {} por {}",
            booking.id,
            booking.vehicle_id,
            booking.start_date,
            booking.end_date,
            booking.total_amount
        );

        Ok(booking)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    /// Reservas del usuario con el resumen del vehículo, las más recientes primero
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<BookingWithVehicle>, AppError> {
        let bookings = sqlx::query_as::<_, BookingWithVehicle>(
            r#"
            SELECT b.id, b.vehicle_id, v.name AS vehicle_name, v.brand AS vehicle_brand,
                   b.start_date, b.end_date, b.total_amount, b.status, b.created_at
            FROM bookings b
            JOIN vehicles v ON v.id = b.vehicle_id
            WHERE b.user_id = $1
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    pub async fn list_all(&self, status: Option<BookingStatus>) -> Result<Vec<Booking>, AppError> {
        let bookings = match status {
            Some(status) => {
                sqlx::query_as::<_, Booking>(
                    "SELECT * FROM bookings WHERE status = $1 ORDER BY created_at DESC",
                )
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(bookings)
    }

    /// Cambio administrativo de estado. Sin tabla de transiciones y sin
    /// recálculo del monto: cualquier estado es asignable directamente.
    pub async fn update_status(&self, id: Uuid, status: BookingStatus) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("Booking", &id.to_string()))?;

        Ok(booking)
    }
}
