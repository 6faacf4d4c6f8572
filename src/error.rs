//! Error types for AutoNest report pricing.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for report parsing and pricing.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty report file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("No price configured for material(s): {}", .materials.join(", "))]
    MissingPrices { materials: Vec<String> },

    #[error("Invalid duration '{value}': expected colon-separated numeric fields")]
    InvalidDuration { value: String },

    #[error("Cannot derive a part name from '{path}'")]
    PartName { path: String },

    #[error("Invalid numeric value for '{field}': '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pricing operations.
pub type Result<T> = std::result::Result<T, QuoteError>;
