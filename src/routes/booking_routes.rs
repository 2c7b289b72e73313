use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{get, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::BookingController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::booking_dto::{
    BookingListQuery, BookingResponse, MyBookingResponse, UpdateBookingStatusRequest,
};
use crate::middleware::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/my", get(my_bookings))
        .route("/", get(list_bookings))
        .route("/:id/status", put(update_booking_status))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// GET /api/booking/my - dashboard del usuario autenticado
async fn my_bookings(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<MyBookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.my_bookings(user.user_id).await?;
    Ok(Json(response))
}

async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<BookingListQuery>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.list(query.status).await?;
    Ok(Json(response))
}

async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBookingStatusRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}
