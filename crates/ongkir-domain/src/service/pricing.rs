//! Pricing engine
//!
//! Turns a validated [`PackageInput`] into a [`CostBreakdown`]. All arithmetic
//! runs at full precision; amounts are rounded only when the breakdown is built.

use crate::constants::pricing::{COST_PER_KG, INSURANCE_RATE, TAX_RATE, VOLUMETRIC_DIVISOR};
use crate::constants::surcharge_for;
use crate::model::{CostBreakdown, Dimensions, DistanceTier, PackageInput};
use crate::service::distance_resolver::resolve_distance;

/// Size-based proxy weight, kg
pub fn volumetric_weight(dimensions: &Dimensions) -> f64 {
    dimensions.volume_cm3() / VOLUMETRIC_DIVISOR
}

/// Billable weight: the greater of declared and volumetric weight
pub fn shipping_weight(weight_kg: f64, dimensions: &Dimensions) -> f64 {
    weight_kg.max(volumetric_weight(dimensions))
}

/// Round to the nearest whole amount. Inputs are never negative.
fn round_amount(value: f64) -> u64 {
    value.round() as u64
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn estimate(input: &PackageInput) -> CostBreakdown {
    let shipping_weight_kg = shipping_weight(input.weight_kg(), input.dimensions());

    let distance = resolve_distance(input.origin(), input.destination());
    let base_cost = DistanceTier::for_distance(distance).base_cost();

    let weight_cost = shipping_weight_kg * COST_PER_KG;
    let category_surcharge = surcharge_for(input.category());

    // Tax and insurance are charged on the unrounded subtotal.
    let exact_subtotal = base_cost as f64 + weight_cost + category_surcharge as f64;
    let tax = round_amount(exact_subtotal * TAX_RATE);
    let insurance_cost = if input.insured() {
        round_amount(exact_subtotal * INSURANCE_RATE)
    } else {
        0
    };

    let weight_cost = round_amount(weight_cost);
    let subtotal = base_cost + weight_cost + category_surcharge;

    CostBreakdown {
        shipping_weight_kg: round_to_cents(shipping_weight_kg),
        base_cost,
        weight_cost,
        category_surcharge,
        subtotal,
        tax,
        insurance_cost,
        total: subtotal + tax + insurance_cost,
    }
}
