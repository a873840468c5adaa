pub mod trip_routes;
pub mod vehicle_routes;
