//! Repositorio de Trips
//!
//! Acceso a la tabla trips. Cada fila guarda los inputs del cálculo
//! junto con el snapshot de métricas que produjeron; el repositorio no
//! recalcula nada, solo persiste lo que el controller le entrega.

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::trip::{Trip, TripInput, TripMetrics};
use crate::utils::errors::AppError;

/// Datos completos de un viaje listo para persistir
#[derive(Debug, Clone)]
pub struct NewTrip {
    pub vehicle_id: Option<Uuid>,
    pub name: String,
    pub notes: Option<String>,
    pub trip_date: NaiveDate,
    pub trip_start_date: Option<NaiveDate>,
    pub trip_end_date: Option<NaiveDate>,
    pub input: TripInput,
    pub metrics: TripMetrics,
}

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: Uuid, new_trip: &NewTrip) -> Result<Trip, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (
                id, user_id, vehicle_id, name, notes,
                trip_date, trip_start_date, trip_end_date,
                trip_type, start_odometer_km, end_odometer_km,
                fuel_consumption_l_per_100km, fuel_price_uah_per_l,
                depreciation_uah_per_km, daily_taxes_uah, freight_uah,
                driver_pay_mode, driver_pay_uah, driver_pay_uah_per_day,
                extra_costs_uah, days_count,
                distance_km, fuel_used_l, fuel_cost_uah, depreciation_cost_uah,
                taxes_cost_uah, driver_cost_uah, total_costs_uah,
                profit_uah, profit_per_km_uah, roi_percent, status,
                created_at, updated_at
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26,
                $27, $28, $29, $30, $31, $32, $33, $34
            )
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(new_trip.vehicle_id)
        .bind(&new_trip.name)
        .bind(&new_trip.notes)
        .bind(new_trip.trip_date)
        .bind(new_trip.trip_start_date)
        .bind(new_trip.trip_end_date)
        .bind(new_trip.input.trip_type)
        .bind(new_trip.input.start_odometer_km)
        .bind(new_trip.input.end_odometer_km)
        .bind(new_trip.input.fuel_consumption_l_per_100km)
        .bind(new_trip.input.fuel_price_uah_per_l)
        .bind(new_trip.input.depreciation_uah_per_km)
        .bind(new_trip.input.daily_taxes_uah)
        .bind(new_trip.input.freight_uah)
        .bind(new_trip.input.driver_pay_mode)
        .bind(new_trip.input.driver_pay_uah)
        .bind(new_trip.input.driver_pay_uah_per_day)
        .bind(new_trip.input.extra_costs_uah)
        .bind(new_trip.input.days_count)
        .bind(new_trip.metrics.distance_km)
        .bind(new_trip.metrics.fuel_used_l)
        .bind(new_trip.metrics.fuel_cost_uah)
        .bind(new_trip.metrics.depreciation_cost_uah)
        .bind(new_trip.metrics.taxes_cost_uah)
        .bind(new_trip.metrics.driver_cost_uah)
        .bind(new_trip.metrics.total_costs_uah)
        .bind(new_trip.metrics.profit_uah)
        .bind(new_trip.metrics.profit_per_km_uah)
        .bind(new_trip.metrics.roi_percent)
        .bind(new_trip.metrics.status)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(trip)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(trip)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            "SELECT * FROM trips WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    /// Reemplazar el viaje completo (inputs + snapshot recalculado)
    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        new_trip: &NewTrip,
    ) -> Result<Trip, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        if current.user_id != user_id {
            return Err(AppError::Forbidden(
                "Trip does not belong to this user".to_string(),
            ));
        }

        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET vehicle_id = $2, name = $3, notes = $4,
                trip_date = $5, trip_start_date = $6, trip_end_date = $7,
                trip_type = $8, start_odometer_km = $9, end_odometer_km = $10,
                fuel_consumption_l_per_100km = $11, fuel_price_uah_per_l = $12,
                depreciation_uah_per_km = $13, daily_taxes_uah = $14, freight_uah = $15,
                driver_pay_mode = $16, driver_pay_uah = $17, driver_pay_uah_per_day = $18,
                extra_costs_uah = $19, days_count = $20,
                distance_km = $21, fuel_used_l = $22, fuel_cost_uah = $23,
                depreciation_cost_uah = $24, taxes_cost_uah = $25, driver_cost_uah = $26,
                total_costs_uah = $27, profit_uah = $28, profit_per_km_uah = $29,
                roi_percent = $30, status = $31, updated_at = $32
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(new_trip.vehicle_id)
        .bind(&new_trip.name)
        .bind(&new_trip.notes)
        .bind(new_trip.trip_date)
        .bind(new_trip.trip_start_date)
        .bind(new_trip.trip_end_date)
        .bind(new_trip.input.trip_type)
        .bind(new_trip.input.start_odometer_km)
        .bind(new_trip.input.end_odometer_km)
        .bind(new_trip.input.fuel_consumption_l_per_100km)
        .bind(new_trip.input.fuel_price_uah_per_l)
        .bind(new_trip.input.depreciation_uah_per_km)
        .bind(new_trip.input.daily_taxes_uah)
        .bind(new_trip.input.freight_uah)
        .bind(new_trip.input.driver_pay_mode)
        .bind(new_trip.input.driver_pay_uah)
        .bind(new_trip.input.driver_pay_uah_per_day)
        .bind(new_trip.input.extra_costs_uah)
        .bind(new_trip.input.days_count)
        .bind(new_trip.metrics.distance_km)
        .bind(new_trip.metrics.fuel_used_l)
        .bind(new_trip.metrics.fuel_cost_uah)
        .bind(new_trip.metrics.depreciation_cost_uah)
        .bind(new_trip.metrics.taxes_cost_uah)
        .bind(new_trip.metrics.driver_cost_uah)
        .bind(new_trip.metrics.total_costs_uah)
        .bind(new_trip.metrics.profit_uah)
        .bind(new_trip.metrics.profit_per_km_uah)
        .bind(new_trip.metrics.roi_percent)
        .bind(new_trip.metrics.status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(trip)
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let trip = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        if trip.user_id != user_id {
            return Err(AppError::Forbidden(
                "Trip does not belong to this user".to_string(),
            ));
        }

        sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
