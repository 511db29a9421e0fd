//! Display formatting for heights and weights.

use crate::units::{cm_to_feet_inches, kg_to_lbs, INCHES_PER_FOOT};
use crate::UnitSystem;

/// Format a height given in centimeters
///
/// Metric output splits the digits of the whole centimeters rather than
/// dividing: the leading digit of a three-or-more digit value becomes the
/// meters place and the rest are written after the point verbatim
/// (`170` -> `1.70m`, `1000` -> `1.000m`). Shorter values are written as
/// `0.<digits>m` (`95` -> `0.95m`).
///
/// Imperial output is `F'I.I"`. Inches that round up to 12 carry into the
/// feet (`182.85` -> `6'0.0"`).
pub fn format_height(height_cm: f64, unit: UnitSystem) -> String {
    match unit {
        UnitSystem::Metric => {
            let whole = height_cm.trunc();
            let sign = if whole < 0.0 { "-" } else { "" };
            let digits = (whole.abs() as u64).to_string();
            if digits.len() >= 3 {
                let (meters, rest) = digits.split_at(1);
                format!("{}{}.{}m", sign, meters, rest)
            } else {
                format!("{}0.{}m", sign, digits)
            }
        }
        UnitSystem::Imperial => {
            let (mut feet, inches) = cm_to_feet_inches(height_cm);
            let mut inches = (inches * 10.0).round() / 10.0;
            if inches >= INCHES_PER_FOOT {
                feet += 1;
                inches -= INCHES_PER_FOOT;
            }
            format!("{}'{:.1}\"", feet, inches)
        }
    }
}

/// Format a weight given in kilograms
pub fn format_weight(weight_kg: f64, unit: UnitSystem) -> String {
    match unit {
        UnitSystem::Metric => format!("{:.1}kg", weight_kg),
        UnitSystem::Imperial => format!("{:.1}lbs", kg_to_lbs(weight_kg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_height_metric() {
        assert_eq!(format_height(170.0, UnitSystem::Metric), "1.70m");
        assert_eq!(format_height(185.9, UnitSystem::Metric), "1.85m");
        assert_eq!(format_height(100.0, UnitSystem::Metric), "1.00m");
    }

    #[test]
    fn test_format_height_metric_short_values() {
        assert_eq!(format_height(95.0, UnitSystem::Metric), "0.95m");
        assert_eq!(format_height(5.0, UnitSystem::Metric), "0.5m");
    }

    #[test]
    fn test_format_height_metric_is_digit_split() {
        // Not 10.00m
        assert_eq!(format_height(1000.0, UnitSystem::Metric), "1.000m");
    }

    #[test]
    fn test_format_height_imperial() {
        assert_eq!(format_height(170.0, UnitSystem::Imperial), "5'6.9\"");
        assert_eq!(format_height(182.0, UnitSystem::Imperial), "5'11.7\"");
    }

    #[test]
    fn test_format_height_imperial_carries_rounded_inches() {
        assert_eq!(format_height(182.85, UnitSystem::Imperial), "6'0.0\"");
        assert_eq!(format_height(182.88, UnitSystem::Imperial), "6'0.0\"");
        assert_eq!(format_height(182.7, UnitSystem::Imperial), "5'11.9\"");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(70.0, UnitSystem::Metric), "70.0kg");
        assert_eq!(format_weight(70.0, UnitSystem::Imperial), "154.3lbs");
        assert_eq!(format_weight(62.34, UnitSystem::Metric), "62.3kg");
    }
}
