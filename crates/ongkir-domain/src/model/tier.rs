//! Distance brackets

use serde::{Deserialize, Serialize};

use crate::constants::pricing::{
    LOCAL_BASE_COST, LOCAL_MAX_KM, LONG_HAUL_BASE_COST, REGIONAL_BASE_COST, REGIONAL_MAX_KM,
};

/// Distance bracket mapping to a fixed base cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceTier {
    /// Up to and including 100 km
    Local,
    /// 101 to 500 km
    Regional,
    /// Beyond 500 km
    LongHaul,
}

impl DistanceTier {
    pub fn for_distance(distance_km: u32) -> Self {
        if distance_km <= LOCAL_MAX_KM {
            DistanceTier::Local
        } else if distance_km <= REGIONAL_MAX_KM {
            DistanceTier::Regional
        } else {
            DistanceTier::LongHaul
        }
    }

    pub fn base_cost(&self) -> u64 {
        match self {
            DistanceTier::Local => LOCAL_BASE_COST,
            DistanceTier::Regional => REGIONAL_BASE_COST,
            DistanceTier::LongHaul => LONG_HAUL_BASE_COST,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DistanceTier::Local => "local (≤100 km)",
            DistanceTier::Regional => "regional (≤500 km)",
            DistanceTier::LongHaul => "long haul (>500 km)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(DistanceTier::for_distance(0), DistanceTier::Local);
        assert_eq!(DistanceTier::for_distance(100), DistanceTier::Local);
        assert_eq!(DistanceTier::for_distance(101), DistanceTier::Regional);
        assert_eq!(DistanceTier::for_distance(500), DistanceTier::Regional);
        assert_eq!(DistanceTier::for_distance(501), DistanceTier::LongHaul);
        assert_eq!(DistanceTier::for_distance(u32::MAX), DistanceTier::LongHaul);
    }

    #[test]
    fn test_base_costs() {
        assert_eq!(DistanceTier::Local.base_cost(), 10_000);
        assert_eq!(DistanceTier::Regional.base_cost(), 15_000);
        assert_eq!(DistanceTier::LongHaul.base_cost(), 25_000);
    }
}
