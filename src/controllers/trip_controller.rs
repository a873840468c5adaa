//! Controller de Trips
//!
//! Orquesta la creación/actualización de viajes: valida el request,
//! mezcla los defaults del vehículo, invoca el servicio de cálculo y
//! persiste los inputs junto con el snapshot de métricas. El preview
//! usa exactamente el mismo servicio pero sin tocar la base de datos.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::trip_dto::{
    ApiResponse, CreateTripRequest, TripPreviewRequest, TripResponse, UpdateTripRequest,
};
use crate::models::trip::{TripInput, TripMetrics};
use crate::models::vehicle::Vehicle;
use crate::repositories::trip_repository::{NewTrip, TripRepository};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::trip_metrics_service::calculate_trip_metrics;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_date_range;

pub struct TripController {
    trips: TripRepository,
    vehicles: VehicleRepository,
}

impl TripController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            trips: TripRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateTripRequest,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        request.validate()?;

        if let (Some(start), Some(end)) = (request.trip_start_date, request.trip_end_date) {
            validate_date_range(start, end)
                .map_err(|_| AppError::Validation("trip_end_date cannot be before trip_start_date".to_string()))?;
        }

        let vehicle = self.resolve_vehicle(user_id, request.vehicle_id).await?;

        let mut input = TripInput {
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
        };
        if let Some(vehicle) = &vehicle {
            merge_vehicle_defaults(&mut input, vehicle);
        }

        let metrics = calculate_trip_metrics(&input)?;

        let trip = self
            .trips
            .create(
                user_id,
                &NewTrip {
                    vehicle_id: request.vehicle_id,
                    name: request.name,
                    notes: request.notes,
                    trip_date: request.trip_date,
                    trip_start_date: request.trip_start_date,
                    trip_end_date: request.trip_end_date,
                    input,
                    metrics,
                },
            )
            .await?;

        tracing::info!("🚚 Trip creado: {} ({:?})", trip.id, trip.status);

        Ok(ApiResponse::success_with_message(
            trip.into(),
            "Viaje creado exitosamente".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        request: UpdateTripRequest,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        request.validate()?;

        let current = self
            .trips
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        if current.user_id != user_id {
            return Err(AppError::Forbidden(
                "Trip does not belong to this user".to_string(),
            ));
        }

        // Mezclar el request sobre los valores persistidos
        let vehicle_id = request.vehicle_id.or(current.vehicle_id);
        let trip_start_date = request.trip_start_date.or(current.trip_start_date);
        let trip_end_date = request.trip_end_date.or(current.trip_end_date);

        if let (Some(start), Some(end)) = (trip_start_date, trip_end_date) {
            validate_date_range(start, end)
                .map_err(|_| AppError::Validation("trip_end_date cannot be before trip_start_date".to_string()))?;
        }

        let input = TripInput {
            trip_type: request.trip_type.unwrap_or(current.trip_type),
            start_odometer_km: request.start_odometer_km.or(current.start_odometer_km),
            end_odometer_km: request.end_odometer_km.or(current.end_odometer_km),
            fuel_consumption_l_per_100km: request
                .fuel_consumption_l_per_100km
                .or(current.fuel_consumption_l_per_100km),
            fuel_price_uah_per_l: request.fuel_price_uah_per_l.or(current.fuel_price_uah_per_l),
            depreciation_uah_per_km: request
                .depreciation_uah_per_km
                .or(current.depreciation_uah_per_km),
            daily_taxes_uah: request.daily_taxes_uah.or(current.daily_taxes_uah),
            freight_uah: request.freight_uah.or(current.freight_uah),
            driver_pay_mode: request.driver_pay_mode.unwrap_or(current.driver_pay_mode),
            driver_pay_uah: request.driver_pay_uah.or(current.driver_pay_uah),
            driver_pay_uah_per_day: request
                .driver_pay_uah_per_day
                .or(current.driver_pay_uah_per_day),
            extra_costs_uah: request.extra_costs_uah.or(current.extra_costs_uah),
            days_count: request.days_count.or(current.days_count),
        };

        // El snapshot se recalcula completo a partir del payload mezclado
        let metrics = calculate_trip_metrics(&input)?;

        let trip = self
            .trips
            .update(
                id,
                user_id,
                &NewTrip {
                    vehicle_id,
                    name: request.name.unwrap_or(current.name),
                    notes: request.notes.or(current.notes),
                    trip_date: request.trip_date.unwrap_or(current.trip_date),
                    trip_start_date,
                    trip_end_date,
                    input,
                    metrics,
                },
            )
            .await?;

        tracing::info!("🔄 Trip actualizado: {} ({:?})", trip.id, trip.status);

        Ok(ApiResponse::success_with_message(
            trip.into(),
            "Viaje actualizado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid, user_id: Uuid) -> Result<TripResponse, AppError> {
        let trip = self
            .trips
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        if trip.user_id != user_id {
            return Err(AppError::Forbidden(
                "Trip does not belong to this user".to_string(),
            ));
        }

        Ok(trip.into())
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<TripResponse>, AppError> {
        let trips = self.trips.find_by_user(user_id).await?;
        Ok(trips.into_iter().map(TripResponse::from).collect())
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.trips.delete(id, user_id).await?;
        Ok(())
    }

    /// Preview en vivo: mismo motor de cálculo, sin persistencia
    pub fn preview(request: TripPreviewRequest) -> Result<TripMetrics, AppError> {
        calculate_trip_metrics(&request.into())
    }

    async fn resolve_vehicle(
        &self,
        user_id: Uuid,
        vehicle_id: Option<Uuid>,
    ) -> Result<Option<Vehicle>, AppError> {
        let Some(vehicle_id) = vehicle_id else {
            return Ok(None);
        };

        let vehicle = self
            .vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        if vehicle.user_id != user_id {
            return Err(AppError::Forbidden(
                "Vehicle does not belong to this user".to_string(),
            ));
        }

        Ok(Some(vehicle))
    }
}

/// Completar los inputs que el cliente no envió con las tarifas
/// por defecto del vehículo
fn merge_vehicle_defaults(input: &mut TripInput, vehicle: &Vehicle) {
    input.fuel_consumption_l_per_100km = input
        .fuel_consumption_l_per_100km
        .or(vehicle.fuel_consumption_l_per_100km);
    input.fuel_price_uah_per_l = input.fuel_price_uah_per_l.or(vehicle.fuel_price_uah_per_l);
    input.depreciation_uah_per_km = input
        .depreciation_uah_per_km
        .or(vehicle.depreciation_uah_per_km);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trip::{DriverPayMode, TripType};
    use crate::models::vehicle::VehicleStatus;
    use chrono::Utc;

    fn vehicle_with_defaults() -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "KamAZ 5320".to_string(),
            license_plate: Some("AA1234BB".to_string()),
            vehicle_status: VehicleStatus::Active,
            fuel_consumption_l_per_100km: Some(27.5),
            fuel_price_uah_per_l: Some(54.9),
            depreciation_uah_per_km: Some(3.2),
            created_at: Utc::now(),
        }
    }

    fn empty_input() -> TripInput {
        TripInput {
            trip_type: TripType::Raw,
            start_odometer_km: None,
            end_odometer_km: None,
            fuel_consumption_l_per_100km: None,
            fuel_price_uah_per_l: None,
            depreciation_uah_per_km: None,
            daily_taxes_uah: None,
            freight_uah: None,
            driver_pay_mode: DriverPayMode::PerTrip,
            driver_pay_uah: None,
            driver_pay_uah_per_day: None,
            extra_costs_uah: None,
            days_count: None,
        }
    }

    #[test]
    fn test_merge_fills_missing_rates_only() {
        let vehicle = vehicle_with_defaults();
        let mut input = empty_input();
        input.fuel_price_uah_per_l = Some(60.0);

        merge_vehicle_defaults(&mut input, &vehicle);

        assert_eq!(input.fuel_consumption_l_per_100km, Some(27.5));
        assert_eq!(input.depreciation_uah_per_km, Some(3.2));
        // El valor explícito del cliente gana sobre el default
        assert_eq!(input.fuel_price_uah_per_l, Some(60.0));
    }

    #[test]
    fn test_merge_without_vehicle_defaults_keeps_none() {
        let mut vehicle = vehicle_with_defaults();
        vehicle.fuel_consumption_l_per_100km = None;
        vehicle.fuel_price_uah_per_l = None;
        vehicle.depreciation_uah_per_km = None;

        let mut input = empty_input();
        merge_vehicle_defaults(&mut input, &vehicle);

        assert_eq!(input.fuel_consumption_l_per_100km, None);
        assert_eq!(input.fuel_price_uah_per_l, None);
        assert_eq!(input.depreciation_uah_per_km, None);
    }
}
