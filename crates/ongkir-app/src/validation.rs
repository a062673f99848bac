//! Raw form input and its validation into a [`PackageInput`]

use ongkir_domain::model::{Dimensions, PackageInput};
use ongkir_types::{City, PackageCategory, ValidationError};

use crate::config::Config;

/// Package details as typed by the user, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageForm {
    pub weight: String,
    pub length: String,
    pub width: String,
    pub height: String,
    pub origin: City,
    pub destination: City,
    pub category: PackageCategory,
    pub insured: bool,
}

impl Default for PackageForm {
    fn default() -> Self {
        Self {
            weight: String::new(),
            length: String::new(),
            width: String::new(),
            height: String::new(),
            origin: City::Jakarta,
            destination: City::Bandung,
            category: PackageCategory::Documents,
            insured: false,
        }
    }
}

/// Parse a strictly positive, finite number. Blank or malformed text yields `None`.
fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

impl PackageForm {
    /// Empty form preselected with the configured route, category and insurance choice
    pub fn from_config(config: &Config) -> Self {
        Self {
            origin: config.default_origin,
            destination: config.default_destination,
            category: config.default_category,
            insured: config.default_insured,
            ..Self::default()
        }
    }

    /// Weight is checked before dimensions; the first failure is returned.
    pub fn validate(&self) -> Result<PackageInput, ValidationError> {
        let weight = parse_positive(&self.weight).ok_or(ValidationError::InvalidWeight)?;

        let length = parse_positive(&self.length);
        let width = parse_positive(&self.width);
        let height = parse_positive(&self.height);
        let (Some(length), Some(width), Some(height)) = (length, width, height) else {
            return Err(ValidationError::InvalidDimensions);
        };

        let dimensions = Dimensions::new(length, width, height)?;
        PackageInput::new(
            weight,
            dimensions,
            self.origin,
            self.destination,
            self.category,
            self.insured,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PackageForm {
        PackageForm {
            weight: "2".to_string(),
            length: "30".to_string(),
            width: "20".to_string(),
            height: "10".to_string(),
            ..PackageForm::default()
        }
    }

    #[test]
    fn test_valid_form() {
        let input = filled().validate().unwrap();
        assert!((input.weight_kg() - 2.0).abs() < f64::EPSILON);
        assert!((input.dimensions().volume_cm3() - 6000.0).abs() < f64::EPSILON);
        assert_eq!(input.origin(), City::Jakarta);
        assert_eq!(input.destination(), City::Bandung);
        assert_eq!(input.category(), PackageCategory::Documents);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let form = PackageForm {
            weight: " 1.5 ".to_string(),
            ..filled()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_invalid_weight() {
        for raw in ["", "   ", "abc", "0", "-3", "NaN", "inf", "1e300"] {
            let form = PackageForm {
                weight: raw.to_string(),
                ..filled()
            };
            assert_eq!(form.validate(), Err(ValidationError::InvalidWeight), "{raw:?}");
        }
    }

    #[test]
    fn test_invalid_dimensions() {
        let cases = [
            ("", "20", "10"),
            ("30", "x", "10"),
            ("30", "20", "0"),
            ("30", "-20", "10"),
        ];
        for (l, w, h) in cases {
            let form = PackageForm {
                length: l.to_string(),
                width: w.to_string(),
                height: h.to_string(),
                ..filled()
            };
            assert_eq!(form.validate(), Err(ValidationError::InvalidDimensions));
        }
    }

    #[test]
    fn test_weight_reported_before_dimensions() {
        let form = PackageForm {
            weight: "0".to_string(),
            ..PackageForm::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::InvalidWeight));
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            default_origin: City::Surabaya,
            default_destination: City::Makassar,
            default_category: PackageCategory::Fish,
            default_insured: true,
            ..Config::default()
        };
        let form = PackageForm::from_config(&config);
        assert_eq!(form.origin, City::Surabaya);
        assert_eq!(form.destination, City::Makassar);
        assert_eq!(form.category, PackageCategory::Fish);
        assert!(form.insured);
        assert!(form.weight.is_empty());
    }
}
