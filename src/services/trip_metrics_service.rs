//! Servicio de cálculo de métricas de viaje
//!
//! Este módulo contiene la lógica de rentabilidad de un viaje: convierte
//! los inputs crudos (odómetro, tarifas de combustible y amortización,
//! días, esquema de pago del conductor, flete) en el snapshot de métricas
//! financieras. Función pura: sin I/O, sin logging, sin estado.
//!
//! Reglas importantes del contrato:
//! - Cada valor intermedio se redondea a 2 decimales inmediatamente
//!   después de calcularse, en el orden indicado. El error de redondeo de
//!   una etapa se propaga a la siguiente; cambiar el punto de redondeo
//!   cambia los resultados a nivel de centavos.
//! - Todo input numérico faltante o negativo se normaliza a 0 (days_count
//!   a 1) en vez de rechazarse: un formulario a medio llenar sigue
//!   produciendo un preview.
//! - El único error posible es el orden del odómetro.

use crate::models::trip::{DriverPayMode, TripInput, TripMetrics, TripStatus};
use crate::utils::errors::{AppError, AppResult};

/// Mensaje del único invariante duro del cálculo
pub const ODOMETER_ORDER_ERROR: &str = "end_odometer_km cannot be less than start_odometer_km";

/// Redondear a 2 decimales (semántica nativa IEEE-754 de f64)
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Normalizar un input de costo: None o negativo se tratan como 0
fn normalize_non_negative(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v > 0.0 => v,
        _ => 0.0,
    }
}

/// Normalizar la cantidad de días: None o < 1 se tratan como 1
fn normalize_days_count(value: Option<i32>) -> i32 {
    match value {
        Some(d) if d >= 1 => d,
        _ => 1,
    }
}

/// Calcular el snapshot de métricas financieras de un viaje
///
/// Determinista: llamadas repetidas con el mismo input devuelven
/// exactamente el mismo resultado. Falla únicamente cuando
/// end_odometer_km < start_odometer_km (None se trata como 0).
pub fn calculate_trip_metrics(input: &TripInput) -> AppResult<TripMetrics> {
    let start_odometer = input.start_odometer_km.unwrap_or(0.0);
    let end_odometer = input.end_odometer_km.unwrap_or(0.0);

    if end_odometer < start_odometer {
        return Err(AppError::Validation(ODOMETER_ORDER_ERROR.to_string()));
    }

    let fuel_consumption = normalize_non_negative(input.fuel_consumption_l_per_100km);
    let fuel_price = normalize_non_negative(input.fuel_price_uah_per_l);
    let depreciation_rate = normalize_non_negative(input.depreciation_uah_per_km);
    let daily_taxes = normalize_non_negative(input.daily_taxes_uah);
    let freight = normalize_non_negative(input.freight_uah);
    let driver_pay = normalize_non_negative(input.driver_pay_uah);
    let driver_pay_per_day = normalize_non_negative(input.driver_pay_uah_per_day);
    let extra_costs = normalize_non_negative(input.extra_costs_uah);
    let days_count = normalize_days_count(input.days_count);

    let distance_km = round2(end_odometer - start_odometer);
    let fuel_used_l = round2(distance_km * fuel_consumption / 100.0);
    let fuel_cost_uah = round2(fuel_used_l * fuel_price);
    let depreciation_cost_uah = round2(distance_km * depreciation_rate);
    let taxes_cost_uah = round2(daily_taxes * days_count as f64);

    let driver_cost_uah = match input.driver_pay_mode {
        DriverPayMode::PerTrip => round2(driver_pay),
        DriverPayMode::PerDay => round2(driver_pay_per_day * days_count as f64),
    };

    let total_costs_uah = round2(
        fuel_cost_uah + depreciation_cost_uah + taxes_cost_uah + driver_cost_uah + extra_costs,
    );

    let income_uah = freight;
    let profit_uah = round2(income_uah - total_costs_uah);

    let profit_per_km_uah = if distance_km > 0.0 {
        round2(profit_uah / distance_km)
    } else {
        0.0
    };

    let roi_percent = if total_costs_uah > 0.0 {
        round2(profit_uah / total_costs_uah * 100.0)
    } else {
        0.0
    };

    let status = if profit_uah > 0.0 {
        TripStatus::Profit
    } else if profit_uah == 0.0 {
        TripStatus::Breakeven
    } else {
        TripStatus::Loss
    };

    Ok(TripMetrics {
        distance_km,
        fuel_used_l,
        fuel_cost_uah,
        depreciation_cost_uah,
        taxes_cost_uah,
        driver_cost_uah,
        total_costs_uah,
        profit_uah,
        profit_per_km_uah,
        roi_percent,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trip::TripType;

    fn base_input() -> TripInput {
        TripInput {
            trip_type: TripType::Commerce,
            start_odometer_km: Some(100.0),
            end_odometer_km: Some(200.0),
            fuel_consumption_l_per_100km: Some(10.0),
            fuel_price_uah_per_l: Some(50.0),
            depreciation_uah_per_km: Some(2.0),
            daily_taxes_uah: Some(150.0),
            freight_uah: Some(10000.0),
            driver_pay_mode: DriverPayMode::PerTrip,
            driver_pay_uah: Some(500.0),
            driver_pay_uah_per_day: None,
            extra_costs_uah: Some(0.0),
            days_count: Some(1),
        }
    }

    #[test]
    fn test_basic_profitable_trip() {
        let metrics = calculate_trip_metrics(&base_input()).unwrap();

        assert_eq!(metrics.distance_km, 100.0);
        assert_eq!(metrics.fuel_used_l, 10.0);
        assert_eq!(metrics.fuel_cost_uah, 500.0);
        assert_eq!(metrics.depreciation_cost_uah, 200.0);
        assert_eq!(metrics.taxes_cost_uah, 150.0);
        assert_eq!(metrics.driver_cost_uah, 500.0);
        assert_eq!(metrics.total_costs_uah, 1350.0);
        assert_eq!(metrics.profit_uah, 8650.0);
        assert_eq!(metrics.profit_per_km_uah, 86.5);
        assert_eq!(metrics.roi_percent, 640.74);
        assert_eq!(metrics.status, TripStatus::Profit);
    }

    #[test]
    fn test_zero_distance_trip() {
        let mut input = base_input();
        input.end_odometer_km = Some(100.0);

        let metrics = calculate_trip_metrics(&input).unwrap();

        assert_eq!(metrics.distance_km, 0.0);
        assert_eq!(metrics.fuel_used_l, 0.0);
        assert_eq!(metrics.fuel_cost_uah, 0.0);
        assert_eq!(metrics.depreciation_cost_uah, 0.0);
        assert_eq!(metrics.profit_per_km_uah, 0.0);
        assert_eq!(metrics.total_costs_uah, 650.0);
        assert_eq!(metrics.profit_uah, 9350.0);
        assert_eq!(metrics.status, TripStatus::Profit);
    }

    #[test]
    fn test_odometer_order_invariant() {
        let mut input = base_input();
        input.start_odometer_km = Some(200.0);
        input.end_odometer_km = Some(100.0);

        let err = calculate_trip_metrics(&input).unwrap_err();
        match err {
            AppError::Validation(msg) => {
                assert_eq!(msg, "end_odometer_km cannot be less than start_odometer_km")
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_odometers_default_to_zero() {
        let mut input = base_input();
        input.start_odometer_km = None;
        input.end_odometer_km = None;

        let metrics = calculate_trip_metrics(&input).unwrap();
        assert_eq!(metrics.distance_km, 0.0);
    }

    #[test]
    fn test_driver_pay_per_day() {
        let mut input = base_input();
        input.driver_pay_mode = DriverPayMode::PerDay;
        input.driver_pay_uah = None;
        input.driver_pay_uah_per_day = Some(800.0);
        input.days_count = Some(3);

        let metrics = calculate_trip_metrics(&input).unwrap();

        assert_eq!(metrics.driver_cost_uah, 2400.0);
        assert_eq!(metrics.taxes_cost_uah, 450.0);
    }

    #[test]
    fn test_per_trip_mode_ignores_daily_rate() {
        let mut input = base_input();
        input.driver_pay_uah_per_day = Some(9999.0);
        input.days_count = Some(5);

        let metrics = calculate_trip_metrics(&input).unwrap();
        assert_eq!(metrics.driver_cost_uah, 500.0);
    }

    #[test]
    fn test_zero_costs_roi_is_zero() {
        let input = TripInput {
            trip_type: TripType::Commerce,
            start_odometer_km: None,
            end_odometer_km: None,
            fuel_consumption_l_per_100km: None,
            fuel_price_uah_per_l: None,
            depreciation_uah_per_km: None,
            daily_taxes_uah: None,
            freight_uah: Some(10000.0),
            driver_pay_mode: DriverPayMode::PerTrip,
            driver_pay_uah: None,
            driver_pay_uah_per_day: None,
            extra_costs_uah: None,
            days_count: None,
        };

        let metrics = calculate_trip_metrics(&input).unwrap();

        assert_eq!(metrics.total_costs_uah, 0.0);
        assert_eq!(metrics.roi_percent, 0.0);
        assert_eq!(metrics.profit_uah, 10000.0);
        assert_eq!(metrics.status, TripStatus::Profit);
    }

    #[test]
    fn test_negative_inputs_clamped_to_zero() {
        let mut input = base_input();
        input.fuel_consumption_l_per_100km = Some(-10.0);
        input.fuel_price_uah_per_l = Some(-50.0);
        input.depreciation_uah_per_km = Some(-2.0);
        input.daily_taxes_uah = Some(-150.0);
        input.driver_pay_uah = Some(-500.0);
        input.extra_costs_uah = Some(-1.0);
        input.freight_uah = Some(-10000.0);

        let metrics = calculate_trip_metrics(&input).unwrap();

        assert_eq!(metrics.fuel_used_l, 0.0);
        assert_eq!(metrics.fuel_cost_uah, 0.0);
        assert_eq!(metrics.depreciation_cost_uah, 0.0);
        assert_eq!(metrics.taxes_cost_uah, 0.0);
        assert_eq!(metrics.driver_cost_uah, 0.0);
        assert_eq!(metrics.total_costs_uah, 0.0);
        assert_eq!(metrics.profit_uah, 0.0);
        assert_eq!(metrics.status, TripStatus::Breakeven);
    }

    #[test]
    fn test_days_count_below_one_defaults_to_one() {
        let mut input = base_input();
        input.driver_pay_mode = DriverPayMode::PerDay;
        input.driver_pay_uah_per_day = Some(800.0);
        input.days_count = Some(0);

        let metrics = calculate_trip_metrics(&input).unwrap();
        assert_eq!(metrics.driver_cost_uah, 800.0);
        assert_eq!(metrics.taxes_cost_uah, 150.0);
    }

    #[test]
    fn test_loss_status() {
        let mut input = base_input();
        input.freight_uah = Some(1000.0);

        let metrics = calculate_trip_metrics(&input).unwrap();
        assert_eq!(metrics.profit_uah, -350.0);
        assert_eq!(metrics.profit_per_km_uah, -3.5);
        assert_eq!(metrics.roi_percent, -25.93);
        assert_eq!(metrics.status, TripStatus::Loss);
    }

    #[test]
    fn test_breakeven_status() {
        let mut input = base_input();
        input.freight_uah = Some(1350.0);

        let metrics = calculate_trip_metrics(&input).unwrap();
        assert_eq!(metrics.profit_uah, 0.0);
        assert_eq!(metrics.status, TripStatus::Breakeven);
    }

    #[test]
    fn test_intermediate_rounding_propagates() {
        // 33.3 km con 7.77 L/100km: el combustible se redondea a 2.59 L
        // antes de multiplicar por el precio.
        let mut input = base_input();
        input.start_odometer_km = Some(0.0);
        input.end_odometer_km = Some(33.3);
        input.fuel_consumption_l_per_100km = Some(7.77);
        input.fuel_price_uah_per_l = Some(54.9);
        input.depreciation_uah_per_km = Some(0.0);
        input.daily_taxes_uah = Some(0.0);
        input.driver_pay_uah = Some(0.0);

        let metrics = calculate_trip_metrics(&input).unwrap();

        assert_eq!(metrics.fuel_used_l, 2.59);
        // 2.59 * 54.9 = 142.191 -> 142.19 (no 33.3*0.0777*54.9 = 142.05...)
        assert_eq!(metrics.fuel_cost_uah, 142.19);
    }

    #[test]
    fn test_all_outputs_have_two_decimals() {
        let mut input = base_input();
        input.start_odometer_km = Some(12.345);
        input.end_odometer_km = Some(987.654);
        input.fuel_consumption_l_per_100km = Some(8.123);
        input.fuel_price_uah_per_l = Some(51.987);
        input.depreciation_uah_per_km = Some(1.111);
        input.daily_taxes_uah = Some(149.99);
        input.freight_uah = Some(12345.67);
        input.extra_costs_uah = Some(33.333);
        input.days_count = Some(2);

        let metrics = calculate_trip_metrics(&input).unwrap();

        for value in [
            metrics.distance_km,
            metrics.fuel_used_l,
            metrics.fuel_cost_uah,
            metrics.depreciation_cost_uah,
            metrics.taxes_cost_uah,
            metrics.driver_cost_uah,
            metrics.total_costs_uah,
            metrics.profit_uah,
            metrics.profit_per_km_uah,
            metrics.roi_percent,
        ] {
            assert_eq!((value * 100.0).round() / 100.0, value);
        }
    }

    #[test]
    fn test_determinism() {
        let input = base_input();
        let first = calculate_trip_metrics(&input).unwrap();
        let second = calculate_trip_metrics(&input).unwrap();
        assert_eq!(first, second);
    }
}
