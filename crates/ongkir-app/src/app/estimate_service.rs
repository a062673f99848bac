//! Estimate Service - validates a form and prices the package
//!
//! 1. Validate the raw form into a `PackageInput`
//! 2. Resolve the route distance and tier
//! 3. Run the pricing engine
//! 4. Return the breakdown together with the route details

use ongkir_domain::model::{CostBreakdown, DistanceTier};
use ongkir_domain::service::{estimate, is_curated_route, resolve_distance};
use ongkir_types::{City, PackageCategory, Result};
use serde::Serialize;

use crate::validation::PackageForm;

/// Distance details for a city pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub origin: City,
    pub destination: City,
    pub distance_km: u32,
    pub tier: DistanceTier,
    pub base_cost: u64,
    /// False when the default distance was used
    pub curated: bool,
}

pub fn route_info(origin: City, destination: City) -> RouteInfo {
    let distance_km = resolve_distance(origin, destination);
    let tier = DistanceTier::for_distance(distance_km);
    RouteInfo {
        origin,
        destination,
        distance_km,
        tier,
        base_cost: tier.base_cost(),
        curated: is_curated_route(origin, destination),
    }
}

/// Everything shown to the user for one estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateReport {
    pub route: RouteInfo,
    pub category: PackageCategory,
    pub insured: bool,
    pub breakdown: CostBreakdown,
}

/// Validate `form` and price it. Nothing is computed when validation fails.
pub fn estimate_package(form: &PackageForm) -> Result<EstimateReport> {
    let input = form.validate().inspect_err(|e| {
        tracing::debug!(error = %e, "Rejected package form");
    })?;

    let route = route_info(input.origin(), input.destination());
    tracing::debug!(
        origin = %route.origin,
        destination = %route.destination,
        distance_km = route.distance_km,
        curated = route.curated,
        "Resolved route"
    );

    let breakdown = estimate(&input);
    tracing::info!(
        category = %input.category(),
        insured = input.insured(),
        shipping_weight_kg = breakdown.shipping_weight_kg,
        total = breakdown.total,
        "Estimate computed"
    );

    Ok(EstimateReport {
        route,
        category: input.category(),
        insured: input.insured(),
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ongkir_types::{Error, ValidationError};

    fn form(weight: &str, dims: (&str, &str, &str)) -> PackageForm {
        PackageForm {
            weight: weight.to_string(),
            length: dims.0.to_string(),
            width: dims.1.to_string(),
            height: dims.2.to_string(),
            ..PackageForm::default()
        }
    }

    #[test]
    fn test_estimate_default_route() {
        let report = estimate_package(&form("2", ("30", "20", "10"))).unwrap();
        assert_eq!(report.route.distance_km, 150);
        assert_eq!(report.route.tier, DistanceTier::Regional);
        assert!(report.route.curated);
        assert_eq!(report.category, PackageCategory::Documents);
        assert!(!report.insured);
        assert_eq!(report.breakdown.total, 28_860);
    }

    #[test]
    fn test_estimate_insured_long_haul() {
        let report = estimate_package(&PackageForm {
            destination: City::Medan,
            category: PackageCategory::Electronics,
            insured: true,
            ..form("5", ("50", "40", "30"))
        })
        .unwrap();
        assert_eq!(report.route.tier, DistanceTier::LongHaul);
        assert_eq!(report.breakdown.insurance_cost, 1_300);
        assert_eq!(report.breakdown.total, 73_450);
    }

    #[test]
    fn test_validation_error_propagates() {
        let err = estimate_package(&form("", ("30", "20", "10"))).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::InvalidWeight)));

        let err = estimate_package(&form("1", ("30", "", "10"))).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::InvalidDimensions)));
    }

    #[test]
    fn test_route_info_default_distance() {
        let info = route_info(City::Tangerang, City::Bekasi);
        assert_eq!(info.distance_km, 300);
        assert_eq!(info.base_cost, 15_000);
        assert!(!info.curated);
        assert_eq!(route_info(City::Bekasi, City::Tangerang).distance_km, 300);
    }

    #[test]
    fn test_report_serializes() {
        let report = estimate_package(&form("2", ("30", "20", "10"))).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["route"]["origin"], "Jakarta");
        assert_eq!(value["route"]["tier"], "regional");
        assert_eq!(value["category"], "Documents");
        assert_eq!(value["breakdown"]["total"], 28_860);
    }
}
