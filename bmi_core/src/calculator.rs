//! BMI computation and classification.

use crate::units::{
    feet_to_cm, height_range_hint, lbs_to_kg, validate_height, validate_weight,
    weight_range_hint, INCHES_PER_FOOT,
};
use crate::{BmiClass, BmiResult, Category, Error, Measurement, Result, UnitSystem};

/// Calculate BMI from weight in kg and height in cm
///
/// The result is rounded to 2 decimal places, half away from zero.
/// Fails with [`Error::InvalidHeight`] when the height is zero, negative
/// or NaN.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    if height_cm.is_nan() || height_cm <= 0.0 {
        return Err(Error::InvalidHeight(height_cm));
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Ok(round_2dp(bmi))
}

/// Classify a BMI value
///
/// Each tier includes its lower bound. Anything below 18.5, including zero
/// and negative values, is Underweight.
pub fn classify_bmi(bmi: f64) -> BmiClass {
    let category = if bmi < 18.5 {
        Category::Underweight
    } else if bmi < 25.0 {
        Category::Normal
    } else if bmi < 30.0 {
        Category::Overweight
    } else {
        Category::Obese
    };

    BmiClass {
        category,
        color: category.color(),
    }
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl BmiResult {
    pub fn from_measurement(measurement: &Measurement) -> Result<Self> {
        let bmi = calculate_bmi(measurement.weight_kg, measurement.height_cm)?;
        let class = classify_bmi(bmi);
        Ok(BmiResult {
            bmi,
            category: class.category,
            color: class.color,
        })
    }
}

impl Measurement {
    pub fn metric(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            weight_kg,
            height_cm,
            unit: UnitSystem::Metric,
            entered_weight: weight_kg,
            entered_height: height_cm,
        }
    }

    /// Build a measurement from pounds and feet + inches
    ///
    /// `feet` may be fractional; `inches` are added on top.
    pub fn imperial(weight_lbs: f64, feet: f64, inches: f64) -> Self {
        Self {
            weight_kg: lbs_to_kg(weight_lbs),
            height_cm: feet_to_cm(feet, inches),
            unit: UnitSystem::Imperial,
            entered_weight: weight_lbs,
            entered_height: feet + inches / INCHES_PER_FOOT,
        }
    }

    /// Whether both values fall in the plausible ranges
    pub fn is_plausible(&self) -> bool {
        self.check_plausible().is_ok()
    }

    /// Like [`Measurement::is_plausible`], but names the offending field
    ///
    /// Values are checked as entered: kg/cm for metric, lbs/feet for imperial.
    pub fn check_plausible(&self) -> Result<()> {
        if !validate_weight(self.entered_weight, self.unit) {
            return Err(Error::OutOfRange(weight_range_hint(self.unit).into()));
        }
        if !validate_height(self.entered_height, self.unit) {
            return Err(Error::OutOfRange(height_range_hint(self.unit).into()));
        }

        Ok(())
    }
}
