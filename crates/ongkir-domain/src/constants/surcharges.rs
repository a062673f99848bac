//! Flat surcharges per package category

use ongkir_types::PackageCategory;
use std::collections::HashMap;
use std::sync::LazyLock;

pub static CATEGORY_SURCHARGES: LazyLock<HashMap<PackageCategory, u64>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert(PackageCategory::Documents, 5_000);
    m.insert(PackageCategory::Clothing, 0);
    m.insert(PackageCategory::Electronics, 10_000);
    m.insert(PackageCategory::Food, 5_000);
    m.insert(PackageCategory::Medicine, 8_000);
    m.insert(PackageCategory::Fragile, 15_000);
    m.insert(PackageCategory::Books, 0);
    m.insert(PackageCategory::Pets, 7_000);
    m.insert(PackageCategory::WildAnimals, 10_000);
    m.insert(PackageCategory::Fish, 8_000);
    m.insert(PackageCategory::Other, 10_000);

    m
});

/// Surcharge for a category
pub fn surcharge_for(category: PackageCategory) -> u64 {
    CATEGORY_SURCHARGES.get(&category).copied().unwrap_or(0)
}
