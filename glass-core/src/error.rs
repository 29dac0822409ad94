//! Error types for glass cutting quotes.
//!
//! Running out of space is not an error: the optimizer reports it through
//! [`SheetLayout::unplaceable`](crate::model::SheetLayout::unplaceable) and
//! [`CuttingPlan::unplaced`](crate::model::CuttingPlan). These variants cover
//! bad caller input and I/O only.

use thiserror::Error;

/// Main error type for the quoting library.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Invalid stock sheet dimensions: {width} x {height}")]
    InvalidStock { width: f64, height: f64 },

    #[error("Request validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Invalid dimension '{part}': expected WIDTHxHEIGHT")]
    InvalidDimension { part: String },

    #[error("No dimensions found in '{input}'")]
    NoDimensions { input: String },

    #[error("Invalid numeric value: {value}")]
    InvalidNumber { value: String },

    #[error("Unknown unit '{value}': expected 'cm' or 'mm'")]
    UnknownUnit { value: String },

    #[error("Glass not found: id={glass_id}")]
    GlassNotFound { glass_id: u32 },

    #[error("Invalid optimizer configuration: {message}")]
    InvalidConfig { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for quoting operations.
pub type Result<T> = std::result::Result<T, QuoteError>;
