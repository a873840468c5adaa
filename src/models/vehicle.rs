//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle con sus tarifas de costo por
//! defecto. Mapea exactamente al schema PostgreSQL con primary key 'id'.
//! Las tarifas por defecto se mezclan en la creación de viajes cuando
//! el cliente no las envía.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del vehículo - mapea al ENUM vehicle_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "vehicle_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Active,
    Maintenance,
    Retired,
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub license_plate: Option<String>,
    pub vehicle_status: VehicleStatus,

    // Tarifas por defecto para el cálculo de viajes
    pub fuel_consumption_l_per_100km: Option<f64>,
    pub fuel_price_uah_per_l: Option<f64>,
    pub depreciation_uah_per_km: Option<f64>,

    pub created_at: DateTime<Utc>,
}
