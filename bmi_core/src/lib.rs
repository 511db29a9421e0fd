#![forbid(unsafe_code)]

//! Core logic for the BMI calculator.
//!
//! This crate provides:
//! - Domain types (units, measurements, categories, history entries)
//! - BMI calculation and classification
//! - Unit conversion, validation and display formatting
//! - History persistence and CSV export
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod calculator;
pub mod units;
pub mod display;
pub mod config;
pub mod logging;
pub mod history;
pub mod export;
pub mod util;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use calculator::{calculate_bmi, classify_bmi};
pub use units::{
    cm_to_feet_inches, feet_inches_to_cm, kg_to_lbs, lbs_to_kg, validate_height, validate_weight,
};
pub use display::{format_height, format_weight};
pub use config::Config;
pub use history::HistoryStore;

/// Crate version, reported by `bmi --version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
