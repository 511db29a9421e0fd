//! Core domain types for the BMI calculator.
//!
//! - Unit systems and caller-supplied measurements
//! - BMI categories and computed results
//! - Persisted history entries

use crate::{Error, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Units and Measurements
// ============================================================================

/// Unit system a value was entered (or is displayed) in
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// The other unit system
    pub fn toggled(&self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(Error::UnknownUnit(s.to_string())),
        }
    }
}

/// A weight/height pair normalised to kilograms and centimeters
///
/// `unit` records which system the caller entered the values in. The
/// `entered_*` fields keep the values as typed (pounds and feet for
/// imperial) so range checks never see conversion error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub unit: UnitSystem,
    pub entered_weight: f64,
    pub entered_height: f64,
}

// ============================================================================
// Categories and Results
// ============================================================================

/// BMI health category
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::Normal,
        Category::Overweight,
        Category::Obese,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }

    /// Presentation color as a hex string
    pub fn color(&self) -> &'static str {
        match self {
            Category::Underweight => "#4A90E2",
            Category::Normal => "#7ED321",
            Category::Overweight => "#F5A623",
            Category::Obese => "#D0021B",
        }
    }

    pub fn color_name(&self) -> &'static str {
        match self {
            Category::Underweight => "Blue",
            Category::Normal => "Green",
            Category::Overweight => "Orange",
            Category::Obese => "Red",
        }
    }

    /// BMI range covered by this category, for legends
    pub fn range(&self) -> &'static str {
        match self {
            Category::Underweight => "< 18.5",
            Category::Normal => "18.5 - 24.9",
            Category::Overweight => "25 - 29.9",
            Category::Obese => ">= 30",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category plus its color code, as returned by classification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmiClass {
    pub category: Category,
    pub color: &'static str,
}

/// A computed BMI with its classification
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: Category,
    pub color: &'static str,
}

// ============================================================================
// History Types
// ============================================================================

/// One saved calculation
///
/// `weight` is in kg and `height` in cm regardless of `unit`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct HistoryEntry {
    #[serde(with = "entry_date")]
    pub date: NaiveDateTime,
    pub weight: f64,
    pub height: f64,
    pub bmi: f64,
    pub unit: UnitSystem,
    pub category: Category,
}

impl HistoryEntry {
    /// Timestamp in the stored `YYYY-MM-DD HH:MM` form
    pub fn date_string(&self) -> String {
        self.date.format(entry_date::FORMAT).to_string()
    }
}

/// Serde adapter for the `YYYY-MM-DD HH:MM` timestamp format
pub(crate) mod entry_date {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M";

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_system_parsing() {
        assert_eq!("metric".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
        assert_eq!(" Imperial ".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert!(matches!(
            "stones".parse::<UnitSystem>(),
            Err(Error::UnknownUnit(_))
        ));
    }

    #[test]
    fn test_unit_system_toggle() {
        assert_eq!(UnitSystem::Metric.toggled(), UnitSystem::Imperial);
        assert_eq!(UnitSystem::Imperial.toggled(), UnitSystem::Metric);
    }

    #[test]
    fn test_entry_serialized_shape() {
        let entry = HistoryEntry {
            date: NaiveDateTime::parse_from_str("2026-10-18 09:30", entry_date::FORMAT).unwrap(),
            weight: 70.0,
            height: 170.0,
            bmi: 24.22,
            unit: UnitSystem::Metric,
            category: Category::Normal,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["date"], "2026-10-18 09:30");
        assert_eq!(value["unit"], "metric");
        assert_eq!(value["category"], "Normal");
        assert_eq!(value["bmi"], 24.22);
    }
}
