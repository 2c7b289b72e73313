use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::booking_dto::{
    BookingResponse, CreateBookingRequest, MyBookingResponse, UpdateBookingStatusRequest,
};
use crate::models::BookingStatus;
use crate::repositories::BookingRepository;
use crate::services::BookingEngine;
use crate::utils::errors::AppError;

pub struct BookingController {
    engine: BookingEngine,
    repository: BookingRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            engine: BookingEngine::new(pool.clone()),
            repository: BookingRepository::new(pool),
        }
    }

    /// Crea una reserva por el camino validado: el motor decide y tarifica,
    /// `create_checked` persiste repitiendo el chequeo dentro de la
    /// transacción. El requester llega siempre como parámetro explícito.
    pub async fn book(
        &self,
        vehicle_id: Uuid,
        user_id: Uuid,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let priced = self
            .engine
            .validate_and_price(vehicle_id, user_id, request.start_date, request.end_date)
            .await?;

        let booking = self.repository.create_checked(&priced).await?;

        Ok(ApiResponse::success_with_message(
            booking.into(),
            "Booking created! Awaiting confirmation.".to_string(),
        ))
    }

    /// Dashboard del usuario: sus reservas, las más recientes primero
    pub async fn my_bookings(&self, user_id: Uuid) -> Result<Vec<MyBookingResponse>, AppError> {
        let bookings = self.repository.list_by_user(user_id).await?;
        Ok(bookings.into_iter().map(Into::into).collect())
    }

    pub async fn list(
        &self,
        status: Option<BookingStatus>,
    ) -> Result<Vec<BookingResponse>, AppError> {
        let bookings = self.repository.list_all(status).await?;
        Ok(bookings.into_iter().map(Into::into).collect())
    }

    /// Cambio administrativo de estado: cualquier estado es asignable, sin
    /// tabla de transiciones ni recálculo del monto
    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateBookingStatusRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self.repository.update_status(id, request.status).await?;
        log::info!("Reserva {} ahora en estado '{}'", booking.id, booking.status);

        Ok(ApiResponse::success_with_message(
            booking.into(),
            "Estado de la reserva actualizado".to_string(),
        ))
    }
}
