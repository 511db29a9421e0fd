//! Unit conversions and input range validation.
//!
//! Canonical units are kilograms and centimeters. Imperial values are only
//! converted at the edges (input and display).

use crate::UnitSystem;
use std::ops::RangeInclusive;

/// Pounds per kilogram
pub const LBS_PER_KG: f64 = 2.20462;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

pub const INCHES_PER_FOOT: f64 = 12.0;

/// Plausible weight in kilograms
pub const METRIC_WEIGHT_RANGE: RangeInclusive<f64> = 20.0..=300.0;

/// Plausible weight in pounds
pub const IMPERIAL_WEIGHT_RANGE: RangeInclusive<f64> = 44.0..=661.0;

/// Plausible height in centimeters
pub const METRIC_HEIGHT_RANGE: RangeInclusive<f64> = 100.0..=250.0;

/// Plausible height in feet
pub const IMPERIAL_HEIGHT_RANGE: RangeInclusive<f64> = 3.3..=8.2;

pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs / LBS_PER_KG
}

/// Split a height in centimeters into whole feet and remaining inches
///
/// Inches are in `[0, 12)`. Negative heights clamp feet to 0.
pub fn cm_to_feet_inches(cm: f64) -> (u32, f64) {
    let total_inches = cm / CM_PER_INCH;
    let feet = (total_inches / INCHES_PER_FOOT).floor() as u32;
    let inches = total_inches.rem_euclid(INCHES_PER_FOOT);
    (feet, inches)
}

/// Inverse of [`cm_to_feet_inches`], accurate to well under 0.1 cm
pub fn feet_inches_to_cm(feet: u32, inches: f64) -> f64 {
    (feet as f64 * INCHES_PER_FOOT + inches) * CM_PER_INCH
}

/// Convert a fractional height in feet (e.g. `5.5`) plus extra inches to cm
pub fn feet_to_cm(feet: f64, extra_inches: f64) -> f64 {
    (feet * INCHES_PER_FOOT + extra_inches) * CM_PER_INCH
}

/// Check a weight against the plausible range for its unit system
///
/// Metric values are kilograms, imperial values are pounds.
pub fn validate_weight(value: f64, unit: UnitSystem) -> bool {
    match unit {
        UnitSystem::Metric => METRIC_WEIGHT_RANGE.contains(&value),
        UnitSystem::Imperial => IMPERIAL_WEIGHT_RANGE.contains(&value),
    }
}

/// Check a height against the plausible range for its unit system
///
/// Metric values are centimeters, imperial values are feet.
pub fn validate_height(value: f64, unit: UnitSystem) -> bool {
    match unit {
        UnitSystem::Metric => METRIC_HEIGHT_RANGE.contains(&value),
        UnitSystem::Imperial => IMPERIAL_HEIGHT_RANGE.contains(&value),
    }
}

/// Human-readable weight range, for prompts and error messages
pub fn weight_range_hint(unit: UnitSystem) -> &'static str {
    match unit {
        UnitSystem::Metric => "Weight must be between 20-300 kg",
        UnitSystem::Imperial => "Weight must be between 44-661 lbs",
    }
}

/// Human-readable height range, for prompts and error messages
pub fn height_range_hint(unit: UnitSystem) -> &'static str {
    match unit {
        UnitSystem::Metric => "Height must be between 100-250 cm",
        UnitSystem::Imperial => "Height must be between 3.3-8.2 feet",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kg_to_lbs() {
        assert!((kg_to_lbs(70.0) - 154.32).abs() < 0.01);
    }

    #[test]
    fn test_lbs_to_kg() {
        assert!((lbs_to_kg(154.32) - 70.0).abs() < 0.01);
    }

    #[test]
    fn test_weight_roundtrip_within_tolerance() {
        for kg in (20..=300).step_by(7) {
            let kg = kg as f64 + 0.3;
            let back = lbs_to_kg(kg_to_lbs(kg));
            assert!((back - kg).abs() < 0.01, "{} came back as {}", kg, back);
        }
    }

    #[test]
    fn test_cm_to_feet_inches() {
        let (feet, inches) = cm_to_feet_inches(170.0);
        assert_eq!(feet, 5);
        assert!((inches - 6.93).abs() < 0.01);
    }

    #[test]
    fn test_feet_inches_to_cm() {
        let cm = feet_inches_to_cm(5, 6.93);
        assert!((cm - 170.0).abs() < 0.1);
    }

    #[test]
    fn test_height_roundtrip_within_tolerance() {
        for cm in (100..=250).step_by(3) {
            let cm = cm as f64 + 0.5;
            let (feet, inches) = cm_to_feet_inches(cm);
            assert!((0.0..12.0).contains(&inches));
            let back = feet_inches_to_cm(feet, inches);
            assert!((back - cm).abs() < 0.1, "{} came back as {}", cm, back);
        }
    }

    #[test]
    fn test_exact_foot_boundary() {
        let (feet, inches) = cm_to_feet_inches(182.88);
        assert_eq!(feet, 6);
        assert!(inches < 0.01);
    }

    #[test]
    fn test_negative_height_clamps_feet() {
        let (feet, inches) = cm_to_feet_inches(-10.0);
        assert_eq!(feet, 0);
        assert!((0.0..12.0).contains(&inches));
    }

    #[test]
    fn test_feet_to_cm() {
        assert!((feet_to_cm(5.5, 0.0) - 167.64).abs() < 1e-9);
        assert!((feet_to_cm(5.0, 6.0) - 167.64).abs() < 1e-9);
    }

    #[test]
    fn test_validate_weight_metric() {
        assert!(validate_weight(70.0, UnitSystem::Metric));
        assert!(validate_weight(20.0, UnitSystem::Metric));
        assert!(validate_weight(300.0, UnitSystem::Metric));
        assert!(!validate_weight(15.0, UnitSystem::Metric));
        assert!(!validate_weight(350.0, UnitSystem::Metric));
    }

    #[test]
    fn test_validate_weight_imperial() {
        assert!(validate_weight(154.0, UnitSystem::Imperial));
        assert!(validate_weight(44.0, UnitSystem::Imperial));
        assert!(validate_weight(661.0, UnitSystem::Imperial));
        assert!(!validate_weight(40.0, UnitSystem::Imperial));
        assert!(!validate_weight(700.0, UnitSystem::Imperial));
    }

    #[test]
    fn test_validate_height() {
        assert!(validate_height(170.0, UnitSystem::Metric));
        assert!(!validate_height(80.0, UnitSystem::Metric));
        assert!(!validate_height(300.0, UnitSystem::Metric));
        assert!(validate_height(5.6, UnitSystem::Imperial));
        assert!(validate_height(3.3, UnitSystem::Imperial));
        assert!(!validate_height(9.0, UnitSystem::Imperial));
    }

    #[test]
    fn test_nan_is_never_valid() {
        assert!(!validate_weight(f64::NAN, UnitSystem::Metric));
        assert!(!validate_height(f64::NAN, UnitSystem::Imperial));
    }
}
