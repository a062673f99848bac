//! Domain model types

pub mod breakdown;
pub mod package;
pub mod tier;

pub use breakdown::{CostBreakdown, LineItem};
pub use package::{Dimensions, PackageInput};
pub use tier::DistanceTier;
