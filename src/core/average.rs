use crate::error::Result;
use crate::utils::validation;

pub const INVALID_NUMBER: &str = "please enter numbers (e.g. 7, 8.5).";

pub fn calculate_average(a: f64, b: f64, c: f64) -> f64 {
    (a + b + c) / 3.0
}

/// Two decimal places, the way averages are displayed.
pub fn format_average(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn parse_note(raw: &str) -> Result<f64> {
    validation::parse_float(raw, "note", INVALID_NUMBER)
}
