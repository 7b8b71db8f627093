//! Fair lending decision engine.
//!
//! Assigns binary approve/deny decisions to loan applicants from a continuous
//! creditworthiness score, under a target overall approval rate, with two
//! competing fairness policies:
//!
//! - **Equality of Opportunity**: a single global threshold, blind to
//!   protected attributes.
//! - **Equality of Outcomes**: independent per-subgroup thresholds chosen so
//!   every protected subgroup reaches the same approval rate.
//!
//! The engine is a pure function of (applicant table, target rate): same
//! inputs, same decisions, bit for bit, regardless of input row order.

pub mod assemble;
pub mod engine;
pub mod exit_codes;
pub mod fairness;
pub mod ingest;
pub mod score;
pub mod table;
pub mod threshold;

pub use engine::{decide, run_policy, PolicyRun};
pub use fairness::aggregate;
pub use fl_common::{AnalysisResult, Decision, Error, Policy, Result};
pub use table::{Applicant, ApplicantTable};
pub use threshold::{solve, ThresholdResult};
