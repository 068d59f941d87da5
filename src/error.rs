//! Error types shared by the calculator, form and rendering layers

use thiserror::Error;

/// Errors raised while turning user input into a rendered projection
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// Field text could not be read as a number
    #[error("could not convert {field} value {value:?} to a number")]
    Conversion { field: &'static str, value: String },

    /// Field parsed but is outside the accepted range
    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("unknown calculator mode: {0}")]
    UnknownMode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to format report: {0}")]
    Format(#[from] std::fmt::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CalculatorError {
    /// HTTP status for reporting this error to a client
    pub fn http_status(&self) -> u16 {
        match self {
            CalculatorError::Conversion { .. }
            | CalculatorError::Validation { .. }
            | CalculatorError::UnknownMode(_)
            | CalculatorError::Json(_) => 400,
            CalculatorError::Io(_) | CalculatorError::Csv(_) | CalculatorError::Format(_) => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
