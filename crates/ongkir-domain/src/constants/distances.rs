//! Distances between well-known city pairs

use ongkir_types::City;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Distance used for any pair missing from [`DISTANCE_TABLE`]
pub const DEFAULT_DISTANCE_KM: u32 = 300;

/// Curated routes, stored in one direction only
pub static DISTANCE_TABLE: LazyLock<HashMap<(City, City), u32>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert((City::Jakarta, City::Bandung), 150);
    m.insert((City::Jakarta, City::Surabaya), 800);
    m.insert((City::Jakarta, City::Medan), 1400);
    m.insert((City::Bandung, City::Surabaya), 700);
    m.insert((City::Bandung, City::Medan), 1300);
    m.insert((City::Surabaya, City::Medan), 1200);

    m
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_six_routes() {
        assert_eq!(DISTANCE_TABLE.len(), 6);
    }

    #[test]
    fn test_no_route_stored_twice() {
        for (a, b) in DISTANCE_TABLE.keys() {
            assert_ne!(a, b);
            assert!(!DISTANCE_TABLE.contains_key(&(*b, *a)));
        }
    }
}
