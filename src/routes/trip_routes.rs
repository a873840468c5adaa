use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::trip_controller::TripController;
use crate::dto::trip_dto::{
    ApiResponse, CreateTripRequest, TripPreviewRequest, TripResponse, UpdateTripRequest,
};
use crate::models::trip::TripMetrics;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_trip))
        .route("/", get(list_trips))
        .route("/preview", post(preview_trip))
        .route("/:id", get(get_trip))
        .route("/:id", put(update_trip))
        .route("/:id", delete(delete_trip))
}

// TODO: Extraer user_id del JWT token cuando implementemos middleware de auth
// Por ahora usamos un user_id hardcoded de ejemplo
async fn get_user_id_from_jwt() -> Uuid {
    // Placeholder - en producción esto vendría del JWT
    Uuid::parse_str("00000000-0000-0000-0000-000000000000").unwrap()
}

async fn create_trip(
    State(state): State<AppState>,
    Json(request): Json<CreateTripRequest>,
) -> Result<Json<ApiResponse<TripResponse>>, AppError> {
    let user_id = get_user_id_from_jwt().await; // TODO: Extraer del JWT
    let controller = TripController::new(state.pool.clone());
    let response = controller.create(user_id, request).await?;
    Ok(Json(response))
}

/// Preview en vivo: no toca la base de datos
async fn preview_trip(
    Json(request): Json<TripPreviewRequest>,
) -> Result<Json<TripMetrics>, AppError> {
    let metrics = TripController::preview(request)?;
    Ok(Json(metrics))
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TripResponse>, AppError> {
    let user_id = get_user_id_from_jwt().await; // TODO: Extraer del JWT
    let controller = TripController::new(state.pool.clone());
    let response = controller.get_by_id(id, user_id).await?;
    Ok(Json(response))
}

async fn list_trips(
    State(state): State<AppState>,
) -> Result<Json<Vec<TripResponse>>, AppError> {
    let user_id = get_user_id_from_jwt().await; // TODO: Extraer del JWT
    let controller = TripController::new(state.pool.clone());
    let response = controller.list_by_user(user_id).await?;
    Ok(Json(response))
}

async fn update_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTripRequest>,
) -> Result<Json<ApiResponse<TripResponse>>, AppError> {
    let user_id = get_user_id_from_jwt().await; // TODO: Extraer del JWT
    let controller = TripController::new(state.pool.clone());
    let response = controller.update(id, user_id, request).await?;
    Ok(Json(response))
}

async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let user_id = get_user_id_from_jwt().await; // TODO: Extraer del JWT
    let controller = TripController::new(state.pool.clone());
    controller.delete(id, user_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Viaje eliminado exitosamente"
    })))
}
