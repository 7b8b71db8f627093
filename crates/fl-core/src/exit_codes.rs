//! Exit codes for the fl-core CLI.
//!
//! Exit codes communicate operation outcome without requiring output parsing.

use fl_common::Error;

/// Exit codes for fl-core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Analysis completed and outputs were written
    Ok = 0,

    /// Configuration error (invalid target rate)
    ConfigError = 10,

    /// Dataset ingest error (unreadable file, missing column)
    IngestError = 11,

    /// Applicant table validation error (duplicate id, bad score)
    ValidationError = 12,

    /// I/O error writing outputs
    IoError = 13,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Map an engine error onto its exit code.
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::InvalidRate { .. } => ExitCode::ConfigError,
            Error::MissingColumn { .. } | Error::Ingest(_) => ExitCode::IngestError,
            Error::DuplicateId { .. }
            | Error::NonFiniteScore { .. }
            | Error::EmptySubgroup { .. } => ExitCode::ValidationError,
            Error::Io(_) | Error::Json(_) => ExitCode::IoError,
        }
    }
}
