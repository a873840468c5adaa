//! Repositorio de Vehicles
//!
//! Acceso a la tabla vehicles con las tarifas por defecto de cada vehículo.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        name: String,
        license_plate: Option<String>,
        fuel_consumption_l_per_100km: Option<f64>,
        fuel_price_uah_per_l: Option<f64>,
        depreciation_uah_per_km: Option<f64>,
    ) -> Result<Vehicle, AppError> {
        let id = Uuid::new_v4();

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                id, user_id, name, license_plate, vehicle_status,
                fuel_consumption_l_per_100km, fuel_price_uah_per_l,
                depreciation_uah_per_km, created_at
            )
            VALUES ($1, $2, $3, $4, 'active', $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(name)
        .bind(license_plate)
        .bind(fuel_consumption_l_per_100km)
        .bind(fuel_price_uah_per_l)
        .bind(depreciation_uah_per_km)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        name: Option<String>,
        license_plate: Option<String>,
        vehicle_status: Option<VehicleStatus>,
        fuel_consumption_l_per_100km: Option<f64>,
        fuel_price_uah_per_l: Option<f64>,
        depreciation_uah_per_km: Option<f64>,
    ) -> Result<Vehicle, AppError> {
        // Obtener vehículo actual
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        // Verificar que pertenece al usuario
        if current.user_id != user_id {
            return Err(AppError::Forbidden(
                "Vehicle does not belong to this user".to_string(),
            ));
        }

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET name = $2, license_plate = $3, vehicle_status = $4,
                fuel_consumption_l_per_100km = $5, fuel_price_uah_per_l = $6,
                depreciation_uah_per_km = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(license_plate.or(current.license_plate))
        .bind(vehicle_status.unwrap_or(current.vehicle_status))
        .bind(fuel_consumption_l_per_100km.or(current.fuel_consumption_l_per_100km))
        .bind(fuel_price_uah_per_l.or(current.fuel_price_uah_per_l))
        .bind(depreciation_uah_per_km.or(current.depreciation_uah_per_km))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let vehicle = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        if vehicle.user_id != user_id {
            return Err(AppError::Forbidden(
                "Vehicle does not belong to this user".to_string(),
            ));
        }

        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
