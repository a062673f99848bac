//! Numeric tariff constants

/// cm³ per kg of billable weight
pub const VOLUMETRIC_DIVISOR: f64 = 6000.0;

/// Charge per kg of shipping weight
pub const COST_PER_KG: f64 = 3000.0;

/// Upper bound (inclusive) of the local tier, km
pub const LOCAL_MAX_KM: u32 = 100;

/// Upper bound (inclusive) of the regional tier, km
pub const REGIONAL_MAX_KM: u32 = 500;

pub const LOCAL_BASE_COST: u64 = 10_000;
pub const REGIONAL_BASE_COST: u64 = 15_000;
pub const LONG_HAUL_BASE_COST: u64 = 25_000;

/// Value-added tax applied to the subtotal
pub const TAX_RATE: f64 = 0.11;

/// Optional insurance premium applied to the subtotal
pub const INSURANCE_RATE: f64 = 0.02;

/// Heaviest declared weight accepted, kg
pub const MAX_WEIGHT_KG: f64 = 1_000_000.0;

/// Longest side accepted, cm
pub const MAX_DIMENSION_CM: f64 = 100_000.0;
