//! Domain services

pub mod distance_resolver;
pub mod pricing;

pub use distance_resolver::{is_curated_route, resolve_distance};
pub use pricing::{estimate, shipping_weight, volumetric_weight};
