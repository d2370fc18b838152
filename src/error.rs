// src/error.rs

use crate::data_input::log_data::Column;
use thiserror::Error;

/// Error taxonomy for log loading, series extraction, and regression.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to read log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("essential column '{}' not found in CSV headers", .0.name())]
    MissingEssentialColumn(Column),

    #[error("column '{}' not found in CSV headers", .0.name())]
    MissingColumn(Column),

    #[error("not enough data for regression: {0}")]
    InsufficientData(String),
}
