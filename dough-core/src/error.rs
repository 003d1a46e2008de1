//! Errors raised when checking caller-supplied input.
//!
//! The calculations themselves never fail; out-of-range numbers are clamped.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DoughError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DoughError {
    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    #[error("multi-phase fermentation needs at least one phase with a positive duration")]
    EmptyMultiPhase,

    #[error("Unknown pizza style: {0}")]
    UnknownStyle(String),

    #[error("Unknown yeast type: {0} (expected fresh, dry or sourdough)")]
    UnknownYeastType(String),

    #[error("Unknown fermentation method: {0} (expected direct, poolish or biga)")]
    UnknownMethod(String),

    #[error("Unknown language: {0} (expected it or en)")]
    UnknownLocale(String),
}
