//! DTOs de Vehicle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::{Vehicle, VehicleStatus};

/// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 4, max = 20))]
    pub license_plate: Option<String>,

    pub fuel_consumption_l_per_100km: Option<f64>,
    pub fuel_price_uah_per_l: Option<f64>,
    pub depreciation_uah_per_km: Option<f64>,
}

/// Request para actualizar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 4, max = 20))]
    pub license_plate: Option<String>,

    pub vehicle_status: Option<VehicleStatus>,

    pub fuel_consumption_l_per_100km: Option<f64>,
    pub fuel_price_uah_per_l: Option<f64>,
    pub depreciation_uah_per_km: Option<f64>,
}

/// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub license_plate: Option<String>,
    pub vehicle_status: VehicleStatus,
    pub fuel_consumption_l_per_100km: Option<f64>,
    pub fuel_price_uah_per_l: Option<f64>,
    pub depreciation_uah_per_km: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            license_plate: vehicle.license_plate,
            vehicle_status: vehicle.vehicle_status,
            fuel_consumption_l_per_100km: vehicle.fuel_consumption_l_per_100km,
            fuel_price_uah_per_l: vehicle.fuel_price_uah_per_l,
            depreciation_uah_per_km: vehicle.depreciation_uah_per_km,
            created_at: vehicle.created_at,
        }
    }
}
