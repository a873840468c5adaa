//! Controllers de la API

pub mod trip_controller;
pub mod vehicle_controller;
