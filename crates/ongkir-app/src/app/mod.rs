//! Application use cases

pub mod estimate_service;

pub use estimate_service::{estimate_package, route_info, EstimateReport, RouteInfo};
