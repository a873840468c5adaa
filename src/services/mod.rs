//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación.
//! El servicio de métricas es deliberadamente puro: los controllers
//! le pasan un TripInput ya armado y persisten el snapshot resultante.

pub mod trip_metrics_service;

pub use trip_metrics_service::*;
