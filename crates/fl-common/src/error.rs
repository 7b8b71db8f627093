//! Error types for the fairlend workspace.

use crate::id::ApplicantId;
use thiserror::Error;

/// Result type alias for fairlend operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for fairlend.
#[derive(Error, Debug)]
pub enum Error {
    // Validation errors (10-19)
    #[error("target rate must be a finite number in [0, 1], got {value}")]
    InvalidRate { value: f64 },

    #[error("applicant table contains duplicate id {id}")]
    DuplicateId { id: ApplicantId },

    #[error("applicant {id} has non-finite score {value}")]
    NonFiniteScore { id: ApplicantId, value: f64 },

    #[error("applicant {id} has an empty subgroup label")]
    EmptySubgroup { id: ApplicantId },

    // Ingest errors (20-29)
    #[error("missing required column: {column}")]
    MissingColumn { column: String },

    #[error("applicant ingest failed: {0}")]
    Ingest(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the stable error code for this error type.
    /// Used for detailed error reporting in JSON output and exit codes.
    pub fn code(&self) -> u32 {
        match self {
            Error::InvalidRate { .. } => 10,
            Error::DuplicateId { .. } => 11,
            Error::NonFiniteScore { .. } => 12,
            Error::EmptySubgroup { .. } => 13,
            Error::MissingColumn { .. } => 20,
            Error::Ingest(_) => 21,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }
}
