//! Trip Costing - servicio de rentabilidad de viajes
//!
//! Backend HTTP sobre el motor de cálculo de métricas de viaje:
//! los endpoints de creación/actualización persisten el snapshot
//! calculado y el endpoint de preview invoca el mismo motor sin
//! tocar la base de datos.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use middleware::cors::cors_middleware;
use state::AppState;

/// Construir el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/trip", routes::trip_routes::create_trip_router())
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .layer(cors_middleware())
        .with_state(state)
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "trip-costing",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
