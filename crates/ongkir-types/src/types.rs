//! Closed enumerations accepted by the pricing engine

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Cities served by the estimator
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
pub enum City {
    Jakarta,
    Bandung,
    Surabaya,
    Medan,
    Semarang,
    Makassar,
    Palembang,
    Tangerang,
    Depok,
    Bekasi,
}

impl City {
    pub const ALL: [City; 10] = [
        City::Jakarta,
        City::Bandung,
        City::Surabaya,
        City::Medan,
        City::Semarang,
        City::Makassar,
        City::Palembang,
        City::Tangerang,
        City::Depok,
        City::Bekasi,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            City::Jakarta => "Jakarta",
            City::Bandung => "Bandung",
            City::Surabaya => "Surabaya",
            City::Medan => "Medan",
            City::Semarang => "Semarang",
            City::Makassar => "Makassar",
            City::Palembang => "Palembang",
            City::Tangerang => "Tangerang",
            City::Depok => "Depok",
            City::Bekasi => "Bekasi",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        City::ALL
            .into_iter()
            .find(|city| city.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCity(s.to_string()))
    }
}

/// Package categories, each carrying a flat surcharge
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
pub enum PackageCategory {
    Documents,
    Clothing,
    Electronics,
    Food,
    Medicine,
    Fragile,
    Books,
    Pets,
    #[serde(rename = "Wild animals")]
    WildAnimals,
    Fish,
    Other,
}

impl PackageCategory {
    pub const ALL: [PackageCategory; 11] = [
        PackageCategory::Documents,
        PackageCategory::Clothing,
        PackageCategory::Electronics,
        PackageCategory::Food,
        PackageCategory::Medicine,
        PackageCategory::Fragile,
        PackageCategory::Books,
        PackageCategory::Pets,
        PackageCategory::WildAnimals,
        PackageCategory::Fish,
        PackageCategory::Other,
    ];

    /// Canonical category value
    pub fn name(&self) -> &'static str {
        match self {
            PackageCategory::Documents => "Documents",
            PackageCategory::Clothing => "Clothing",
            PackageCategory::Electronics => "Electronics",
            PackageCategory::Food => "Food",
            PackageCategory::Medicine => "Medicine",
            PackageCategory::Fragile => "Fragile",
            PackageCategory::Books => "Books",
            PackageCategory::Pets => "Pets",
            PackageCategory::WildAnimals => "Wild animals",
            PackageCategory::Fish => "Fish",
            PackageCategory::Other => "Other",
        }
    }

    /// Human-facing label shown in listings
    pub fn label(&self) -> &'static str {
        match self {
            PackageCategory::Food => "Food Items",
            PackageCategory::Fragile => "Fragile Items",
            other => other.name(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PackageCategory::Documents => "📄",
            PackageCategory::Clothing => "👕",
            PackageCategory::Electronics => "📱",
            PackageCategory::Food => "🍎",
            PackageCategory::Medicine => "💊",
            PackageCategory::Fragile => "🏺",
            PackageCategory::Books => "📚",
            PackageCategory::Pets => "🐕",
            PackageCategory::WildAnimals => "🦁",
            PackageCategory::Fish => "🐟",
            PackageCategory::Other => "🤔",
        }
    }
}

impl fmt::Display for PackageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PackageCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['-', '_'], " ");
        PackageCategory::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}
