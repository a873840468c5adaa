//! Repositorios de acceso a datos

pub mod trip_repository;
pub mod vehicle_repository;
