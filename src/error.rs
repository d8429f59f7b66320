//! Error types for the spray chart library

use std::fmt;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, ChartError>;

/// Query parameters that callers are required to supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryParam {
    Batter,
    Pitcher,
}

impl QueryParam {
    /// Name of the parameter in a query string.
    pub fn key(&self) -> &'static str {
        match self {
            QueryParam::Batter => "batter",
            QueryParam::Pitcher => "pitcher",
        }
    }
}

impl fmt::Display for QueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QueryParam::Batter => "Batter",
            QueryParam::Pitcher => "Pitcher",
        };
        write!(f, "{}", s)
    }
}

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    #[error("{param} name is required")]
    MissingParameter { param: QueryParam },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Invalid game date serial: {serial}")]
    InvalidDate { serial: f64 },

    #[error("Data file not provided and {env_var} environment variable not set")]
    MissingDataPath { env_var: String },

    #[error("Unsupported data file format: {path}")]
    UnsupportedFormat { path: String },

    #[error("Workbook parsing failed: {message}")]
    Workbook { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<calamine::XlsxError> for ChartError {
    fn from(err: calamine::XlsxError) -> Self {
        ChartError::Workbook {
            message: err.to_string(),
        }
    }
}

impl ChartError {
    /// Whether the error was caused by the caller's input rather than the data source.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ChartError::MissingParameter { .. } | ChartError::BadRequest { .. }
        )
    }
}
