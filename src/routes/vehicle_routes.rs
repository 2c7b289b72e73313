use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::{BookingController, VehicleController};
use crate::dto::auth_dto::ApiResponse;
use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest};
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, SetVehicleFeaturesRequest, UpdateVehicleRequest, VehicleDetailResponse,
    VehicleResponse, VehicleSearchQuery,
};
use crate::middleware::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router(state: AppState) -> Router<AppState> {
    // Lectura del catálogo pública; gestión y reserva requieren JWT
    let public = Router::new()
        .route("/", get(list_vehicles))
        .route("/latest", get(latest_vehicles))
        .route("/:id", get(get_vehicle));

    let protected = Router::new()
        .route("/", post(create_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id", delete(delete_vehicle))
        .route("/:id/features", put(set_vehicle_features))
        .route("/:id/book", post(book_vehicle))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleResponse>>), AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleDetailResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehicleSearchQuery>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list_available(query.q.as_deref()).await?;
    Ok(Json(response))
}

async fn latest_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list_latest().await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}

async fn set_vehicle_features(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetVehicleFeaturesRequest>,
) -> Result<Json<ApiResponse<VehicleDetailResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.set_features(id, request).await?;
    Ok(Json(response))
}

/// POST /api/vehicle/:id/book - el camino validado de creación de reservas
async fn book_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingResponse>>), AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.book(id, user.user_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
