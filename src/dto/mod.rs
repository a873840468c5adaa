//! DTOs de la API
//!
//! Requests y responses serializables, separados de los modelos
//! que mapean al schema de base de datos.

pub mod trip_dto;
pub mod vehicle_dto;
