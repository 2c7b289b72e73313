use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::FeatureController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::feature_dto::CreateFeatureRequest;
use crate::middleware::auth_middleware;
use crate::models::Feature;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_feature_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_features))
        .merge(
            Router::new()
                .route("/", post(create_feature))
                .route_layer(middleware::from_fn_with_state(state, auth_middleware)),
        )
}

async fn create_feature(
    State(state): State<AppState>,
    Json(request): Json<CreateFeatureRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Feature>>), AppError> {
    let controller = FeatureController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_features(
    State(state): State<AppState>,
) -> Result<Json<Vec<Feature>>, AppError> {
    let controller = FeatureController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
