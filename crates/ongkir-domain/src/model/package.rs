//! Validated package attributes

use ongkir_types::{City, PackageCategory, ValidationError};
use serde::Serialize;

use crate::constants::pricing::{MAX_DIMENSION_CM, MAX_WEIGHT_KG};

/// Finite, above zero and no larger than `max`
fn is_within(value: f64, max: f64) -> bool {
    value.is_finite() && value > 0.0 && value <= max
}

/// Bounding box of a package, in centimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    length_cm: f64,
    width_cm: f64,
    height_cm: f64,
}

impl Dimensions {
    pub fn new(length_cm: f64, width_cm: f64, height_cm: f64) -> Result<Self, ValidationError> {
        let fits = |side: f64| is_within(side, MAX_DIMENSION_CM);
        if !(fits(length_cm) && fits(width_cm) && fits(height_cm)) {
            return Err(ValidationError::InvalidDimensions);
        }
        Ok(Self {
            length_cm,
            width_cm,
            height_cm,
        })
    }

    pub fn length_cm(&self) -> f64 {
        self.length_cm
    }

    pub fn width_cm(&self) -> f64 {
        self.width_cm
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn volume_cm3(&self) -> f64 {
        self.length_cm * self.width_cm * self.height_cm
    }
}

/// One estimate request.
///
/// Only constructible through [`PackageInput::new`], so the pricing engine
/// never sees a non-positive weight or dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageInput {
    weight_kg: f64,
    dimensions: Dimensions,
    origin: City,
    destination: City,
    category: PackageCategory,
    insured: bool,
}

impl PackageInput {
    pub fn new(
        weight_kg: f64,
        dimensions: Dimensions,
        origin: City,
        destination: City,
        category: PackageCategory,
        insured: bool,
    ) -> Result<Self, ValidationError> {
        if !is_within(weight_kg, MAX_WEIGHT_KG) {
            return Err(ValidationError::InvalidWeight);
        }
        Ok(Self {
            weight_kg,
            dimensions,
            origin,
            destination,
            category,
            insured,
        })
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn origin(&self) -> City {
        self.origin
    }

    pub fn destination(&self) -> City {
        self.destination
    }

    pub fn category(&self) -> PackageCategory {
        self.category
    }

    pub fn insured(&self) -> bool {
        self.insured
    }
}
