use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Booking, BookingStatus};
use crate::repositories::booking_repository::BookingWithVehicle;

// Request para reservar un vehículo. El monto total nunca viene del caller,
// lo calcula siempre el motor de reservas.
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

// Request para cambiar el estado de una reserva
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

// Query params para el listado de reservas
#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    pub status: Option<BookingStatus>,
}

// Response de reserva
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            user_id: b.user_id,
            vehicle_id: b.vehicle_id,
            start_date: b.start_date,
            end_date: b.end_date,
            total_amount: b.total_amount,
            status: b.status,
            created_at: b.created_at,
        }
    }
}

// Response del dashboard: reserva + resumen del vehículo
#[derive(Debug, Serialize)]
pub struct MyBookingResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub vehicle_name: String,
    pub vehicle_brand: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<BookingWithVehicle> for MyBookingResponse {
    fn from(b: BookingWithVehicle) -> Self {
        Self {
            id: b.id,
            vehicle_id: b.vehicle_id,
            vehicle_name: b.vehicle_name,
            vehicle_brand: b.vehicle_brand,
            start_date: b.start_date,
            end_date: b.end_date,
            total_amount: b.total_amount,
            status: b.status,
            created_at: b.created_at,
        }
    }
}
