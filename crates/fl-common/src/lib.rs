//! Fair lending shared types, IDs, and errors.
//!
//! This crate provides foundational types shared across the fairlend crates:
//! - Applicant and subgroup identity types
//! - The serializable decision/statistics result model
//! - Common error types with stable codes
//! - Schema versioning

pub mod error;
pub mod id;
pub mod model;
pub mod schema;

pub use error::{Error, Result};
pub use id::{ApplicantId, RunId, SubgroupKey};
pub use model::{
    AnalysisResult, Cutoff, CutoffSet, CutoffSummary, Decision, FairnessReport, Policy,
    PolicyResult, RunMeta, SubgroupStats,
};
pub use schema::SCHEMA_VERSION;
