//! Static tariff tables

pub mod distances;
pub mod pricing;
pub mod surcharges;

pub use distances::{DEFAULT_DISTANCE_KM, DISTANCE_TABLE};
pub use surcharges::{surcharge_for, CATEGORY_SURCHARGES};
