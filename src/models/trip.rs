//! Modelo de Trip
//!
//! Este módulo contiene el struct Trip y los tipos de dominio del
//! cálculo de rentabilidad. Mapea exactamente al schema PostgreSQL
//! con primary key 'id'. Las métricas se guardan como snapshot
//! desnormalizado junto a los inputs que las produjeron, para que
//! los listados e informes históricos no tengan que recalcular.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Tipo de viaje - mapea al ENUM trip_type
///
/// Informativo para la capa de presentación (decide si mostrar
/// profit/ROI o costo por unidad); nunca cambia la aritmética.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "trip_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    Raw,
    Commerce,
}

/// Modo de pago del conductor - mapea al ENUM driver_pay_mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "driver_pay_mode", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DriverPayMode {
    PerTrip,
    PerDay,
}

/// Resultado de rentabilidad - mapea al ENUM trip_status
///
/// Se deriva únicamente del signo de profit_uah.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "trip_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Profit,
    Breakeven,
    Loss,
}

/// Inputs crudos del cálculo de un viaje
///
/// Todos los campos numéricos son opcionales: un formulario a medio
/// llenar sigue produciendo un preview best-effort. La normalización
/// (None/negativo => 0, days_count < 1 => 1) la aplica el servicio
/// de cálculo, no este struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripInput {
    pub trip_type: TripType,
    pub start_odometer_km: Option<f64>,
    pub end_odometer_km: Option<f64>,
    pub fuel_consumption_l_per_100km: Option<f64>,
    pub fuel_price_uah_per_l: Option<f64>,
    pub depreciation_uah_per_km: Option<f64>,
    pub daily_taxes_uah: Option<f64>,
    pub freight_uah: Option<f64>,
    pub driver_pay_mode: DriverPayMode,
    pub driver_pay_uah: Option<f64>,
    pub driver_pay_uah_per_day: Option<f64>,
    pub extra_costs_uah: Option<f64>,
    pub days_count: Option<i32>,
}

/// Métricas financieras derivadas de un viaje
///
/// Snapshot inmutable: se produce fresco en cada llamada al servicio
/// de cálculo y nunca se muta. Todos los valores vienen redondeados
/// a 2 decimales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripMetrics {
    pub distance_km: f64,
    pub fuel_used_l: f64,
    pub fuel_cost_uah: f64,
    pub depreciation_cost_uah: f64,
    pub taxes_cost_uah: f64,
    pub driver_cost_uah: f64,
    pub total_costs_uah: f64,
    pub profit_uah: f64,
    pub profit_per_km_uah: f64,
    pub roi_percent: f64,
    pub status: TripStatus,
}

/// Trip principal - mapea exactamente a la tabla trips
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub name: String,
    pub notes: Option<String>,
    pub trip_date: NaiveDate,
    pub trip_start_date: Option<NaiveDate>,
    pub trip_end_date: Option<NaiveDate>,

    // Inputs del cálculo
    pub trip_type: TripType,
    pub start_odometer_km: Option<f64>,
    pub end_odometer_km: Option<f64>,
    pub fuel_consumption_l_per_100km: Option<f64>,
    pub fuel_price_uah_per_l: Option<f64>,
    pub depreciation_uah_per_km: Option<f64>,
    pub daily_taxes_uah: Option<f64>,
    pub freight_uah: Option<f64>,
    pub driver_pay_mode: DriverPayMode,
    pub driver_pay_uah: Option<f64>,
    pub driver_pay_uah_per_day: Option<f64>,
    pub extra_costs_uah: Option<f64>,
    pub days_count: Option<i32>,

    // Snapshot de métricas
    pub distance_km: f64,
    pub fuel_used_l: f64,
    pub fuel_cost_uah: f64,
    pub depreciation_cost_uah: f64,
    pub taxes_cost_uah: f64,
    pub driver_cost_uah: f64,
    pub total_costs_uah: f64,
    pub profit_uah: f64,
    pub profit_per_km_uah: f64,
    pub roi_percent: f64,
    pub status: TripStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    /// Reconstruir los inputs del cálculo desde la fila persistida
    pub fn input(&self) -> TripInput {
        TripInput {
            trip_type: self.trip_type,
            start_odometer_km: self.start_odometer_km,
            end_odometer_km: self.end_odometer_km,
            fuel_consumption_l_per_100km: self.fuel_consumption_l_per_100km,
            fuel_price_uah_per_l: self.fuel_price_uah_per_l,
            depreciation_uah_per_km: self.depreciation_uah_per_km,
            daily_taxes_uah: self.daily_taxes_uah,
            freight_uah: self.freight_uah,
            driver_pay_mode: self.driver_pay_mode,
            driver_pay_uah: self.driver_pay_uah,
            driver_pay_uah_per_day: self.driver_pay_uah_per_day,
            extra_costs_uah: self.extra_costs_uah,
            days_count: self.days_count,
        }
    }

    /// Snapshot de métricas persistido en la fila
    pub fn metrics(&self) -> TripMetrics {
        TripMetrics {
            distance_km: self.distance_km,
            fuel_used_l: self.fuel_used_l,
            fuel_cost_uah: self.fuel_cost_uah,
            depreciation_cost_uah: self.depreciation_cost_uah,
            taxes_cost_uah: self.taxes_cost_uah,
            driver_cost_uah: self.driver_cost_uah,
            total_costs_uah: self.total_costs_uah,
            profit_uah: self.profit_uah,
            profit_per_km_uah: self.profit_per_km_uah,
            roi_percent: self.roi_percent,
            status: self.status,
        }
    }
}
