//! Error types for fence material calculation.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for fence processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Project file not found (-1)
    FileNotFound = -1,
    /// Empty project file (-2)
    EmptyFile = -2,
    /// General parse error (-3)
    ParseError = -3,
    /// No segments in project (-11)
    NoSegments = -11,
    /// Segment length non-positive or too large (E100)
    InvalidSegmentLength = 100,
    /// Cut length non-positive or longer than stock (E101)
    InvalidCutLength = 101,
    /// Material configuration out of range (E200)
    InvalidConfig = 200,
}

/// Main error type for the calculator.
#[derive(Debug, Error)]
pub enum FenceError {
    #[error("Project file not found: {path}")]
    ProjectNotFound { path: PathBuf },

    #[error("Empty project file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("No fence segments defined")]
    NoSegments,

    #[error("Invalid length for segment {index}: {length} ft (must be positive and within limits)")]
    InvalidSegmentLength { index: usize, length: f64 },

    #[error("Invalid cut length {length} ft: must be positive and at most the stock length {stock_length} ft")]
    InvalidCutLength { length: f64, stock_length: f64 },

    #[error("Invalid value for '{field}': {value}")]
    InvalidConfig { field: &'static str, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FenceError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            FenceError::ProjectNotFound { .. } => ErrorCode::FileNotFound,
            FenceError::EmptyFile { .. } => ErrorCode::EmptyFile,
            FenceError::ParseError { .. } => ErrorCode::ParseError,
            FenceError::NoSegments => ErrorCode::NoSegments,
            FenceError::InvalidSegmentLength { .. } => ErrorCode::InvalidSegmentLength,
            FenceError::InvalidCutLength { .. } => ErrorCode::InvalidCutLength,
            FenceError::InvalidConfig { .. } => ErrorCode::InvalidConfig,
            FenceError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

impl From<serde_json::Error> for FenceError {
    fn from(err: serde_json::Error) -> Self {
        FenceError::ParseError {
            message: err.to_string(),
        }
    }
}

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, FenceError>;
