//! DTOs de Trip
//!
//! Requests y responses de la API de viajes. La capa de transporte se
//! mantiene separada del modelo: los requests se validan aquí y el
//! controller arma el TripInput autoritativo (mezclando los defaults
//! del vehículo) antes de invocar el servicio de cálculo.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::trip::{DriverPayMode, Trip, TripInput, TripMetrics, TripType};

fn default_trip_type() -> TripType {
    TripType::Raw
}

fn default_driver_pay_mode() -> DriverPayMode {
    DriverPayMode::PerTrip
}

/// Request para crear un nuevo viaje
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTripRequest {
    pub vehicle_id: Option<Uuid>,

    #[validate(length(min = 1, max = 200))]
    pub name: String,

    pub notes: Option<String>,

    pub trip_date: NaiveDate,
    pub trip_start_date: Option<NaiveDate>,
    pub trip_end_date: Option<NaiveDate>,

    #[serde(default = "default_trip_type")]
    pub trip_type: TripType,

    pub start_odometer_km: Option<f64>,
    pub end_odometer_km: Option<f64>,
    pub fuel_consumption_l_per_100km: Option<f64>,
    pub fuel_price_uah_per_l: Option<f64>,
    pub depreciation_uah_per_km: Option<f64>,
    pub daily_taxes_uah: Option<f64>,
    pub freight_uah: Option<f64>,

    #[serde(default = "default_driver_pay_mode")]
    pub driver_pay_mode: DriverPayMode,

    pub driver_pay_uah: Option<f64>,
    pub driver_pay_uah_per_day: Option<f64>,
    pub extra_costs_uah: Option<f64>,
    pub days_count: Option<i32>,
}

/// Request para actualizar un viaje existente
///
/// Los campos ausentes conservan el valor persistido. El snapshot de
/// métricas nunca se parchea a mano: se recalcula completo a partir
/// del payload mezclado.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTripRequest {
    pub vehicle_id: Option<Uuid>,

    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    pub notes: Option<String>,

    pub trip_date: Option<NaiveDate>,
    pub trip_start_date: Option<NaiveDate>,
    pub trip_end_date: Option<NaiveDate>,

    pub trip_type: Option<TripType>,

    pub start_odometer_km: Option<f64>,
    pub end_odometer_km: Option<f64>,
    pub fuel_consumption_l_per_100km: Option<f64>,
    pub fuel_price_uah_per_l: Option<f64>,
    pub depreciation_uah_per_km: Option<f64>,
    pub daily_taxes_uah: Option<f64>,
    pub freight_uah: Option<f64>,

    pub driver_pay_mode: Option<DriverPayMode>,

    pub driver_pay_uah: Option<f64>,
    pub driver_pay_uah_per_day: Option<f64>,
    pub extra_costs_uah: Option<f64>,
    pub days_count: Option<i32>,
}

/// Request de preview en vivo
///
/// Sin persistencia y sin merge de defaults del vehículo: se calcula
/// sobre lo que el formulario tenga en ese momento.
#[derive(Debug, Deserialize)]
pub struct TripPreviewRequest {
    #[serde(default = "default_trip_type")]
    pub trip_type: TripType,

    pub start_odometer_km: Option<f64>,
    pub end_odometer_km: Option<f64>,
    pub fuel_consumption_l_per_100km: Option<f64>,
    pub fuel_price_uah_per_l: Option<f64>,
    pub depreciation_uah_per_km: Option<f64>,
    pub daily_taxes_uah: Option<f64>,
    pub freight_uah: Option<f64>,

    #[serde(default = "default_driver_pay_mode")]
    pub driver_pay_mode: DriverPayMode,

    pub driver_pay_uah: Option<f64>,
    pub driver_pay_uah_per_day: Option<f64>,
    pub extra_costs_uah: Option<f64>,
    pub days_count: Option<i32>,
}

impl From<TripPreviewRequest> for TripInput {
    fn from(request: TripPreviewRequest) -> Self {
        TripInput {
            trip_type: request.trip_type,
            start_odometer_km: request.start_odometer_km,
            end_odometer_km: request.end_odometer_km,
            fuel_consumption_l_per_100km: request.fuel_consumption_l_per_100km,
            fuel_price_uah_per_l: request.fuel_price_uah_per_l,
            depreciation_uah_per_km: request.depreciation_uah_per_km,
            daily_taxes_uah: request.daily_taxes_uah,
            freight_uah: request.freight_uah,
            driver_pay_mode: request.driver_pay_mode,
            driver_pay_uah: request.driver_pay_uah,
            driver_pay_uah_per_day: request.driver_pay_uah_per_day,
            extra_costs_uah: request.extra_costs_uah,
            days_count: request.days_count,
        }
    }
}

/// Response de viaje para la API
#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub name: String,
    pub notes: Option<String>,
    pub trip_date: NaiveDate,
    pub trip_start_date: Option<NaiveDate>,
    pub trip_end_date: Option<NaiveDate>,
    pub input: TripInput,
    pub metrics: TripMetrics,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            vehicle_id: trip.vehicle_id,
            name: trip.name.clone(),
            notes: trip.notes.clone(),
            trip_date: trip.trip_date,
            trip_start_date: trip.trip_start_date,
            trip_end_date: trip.trip_end_date,
            input: trip.input(),
            metrics: trip.metrics(),
            created_at: trip.created_at,
            updated_at: trip.updated_at,
        }
    }
}

/// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
