//! Serializable decision and statistics model.
//!
//! These are the shapes handed to external consumers (file writers,
//! dashboards). The engine computes them; this crate only defines them, so
//! that rendering crates do not depend on the engine.

use crate::id::{ApplicantId, RunId, SubgroupKey};
use crate::schema::SCHEMA_VERSION;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Fairness policy that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Single global threshold, blind to protected attributes.
    Opportunity,
    /// Independent per-subgroup thresholds equalizing approval rates.
    Outcomes,
}

impl Policy {
    /// Human-readable policy name for report headings.
    pub fn label(&self) -> &'static str {
        match self {
            Policy::Opportunity => "Equality of Opportunity",
            Policy::Outcomes => "Equality of Outcomes",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Opportunity => write!(f, "opportunity"),
            Policy::Outcomes => write!(f, "outcomes"),
        }
    }
}

/// One approve/deny decision for one applicant under one policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub applicant_id: ApplicantId,
    pub approved: bool,
    pub policy: Policy,
}

/// Minimum score required for approval under one threshold computation.
///
/// An explicit enum rather than ±infinity sentinels: serde_json cannot
/// represent non-finite floats, and the two extremes carry distinct meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "score", rename_all = "snake_case")]
pub enum Cutoff {
    /// Target count is zero; no score qualifies.
    Unattainable,
    /// Every applicant qualifies.
    Open,
    /// Score of the lowest-ranked approved applicant.
    At(f64),
}

impl Cutoff {
    /// The cutoff as a raw score: `Unattainable` maps to +∞, `Open` to −∞.
    pub fn as_score(&self) -> f64 {
        match self {
            Cutoff::Unattainable => f64::INFINITY,
            Cutoff::Open => f64::NEG_INFINITY,
            Cutoff::At(score) => *score,
        }
    }
}

impl fmt::Display for Cutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cutoff::Unattainable => write!(f, "unattainable"),
            Cutoff::Open => write!(f, "open"),
            Cutoff::At(score) => write!(f, "{score:.4}"),
        }
    }
}

/// Audit view of one threshold computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutoffSummary {
    pub cutoff: Cutoff,
    pub target_count: usize,
    pub approved_count: usize,
    pub achieved_rate: f64,
}

/// Cutoffs for one policy run: a single global cutoff (opportunity) or one
/// per subgroup (outcomes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scope", content = "cutoffs", rename_all = "snake_case")]
pub enum CutoffSet {
    Global(CutoffSummary),
    PerSubgroup(BTreeMap<SubgroupKey, CutoffSummary>),
}

/// Per-subgroup approval statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubgroupStats {
    pub size: usize,
    pub approved_count: usize,
    pub approval_rate: f64,
}

/// Cross-subgroup fairness metrics for one policy's decision set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairnessReport {
    pub subgroups: BTreeMap<SubgroupKey, SubgroupStats>,
    /// min(subgroup rate) / max(subgroup rate); 1.0 when every rate is zero.
    pub disparate_impact_ratio: f64,
    /// max(subgroup rate) − min(subgroup rate).
    pub max_rate_gap: f64,
}

/// Everything one policy produced: decisions, cutoffs, fairness metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyResult {
    pub policy: Policy,
    pub cutoffs: CutoffSet,
    pub decisions: Vec<Decision>,
    pub report: FairnessReport,
}

/// Run identity and timestamp, captured by the caller so the engine stays a
/// pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMeta {
    pub run_id: RunId,
    pub generated_at: DateTime<Utc>,
}

impl RunMeta {
    /// Stamp a fresh run id and timestamp.
    pub fn capture() -> Self {
        RunMeta {
            run_id: RunId::new(),
            generated_at: Utc::now(),
        }
    }
}

/// The complete assembled payload: both policies side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub schema_version: String,
    pub run_id: RunId,
    pub generated_at: DateTime<Utc>,
    pub target_rate: f64,
    pub population: usize,
    pub opportunity: PolicyResult,
    pub outcomes: PolicyResult,
}

impl AnalysisResult {
    /// Current schema version string stamped on new results.
    pub fn current_schema_version() -> String {
        SCHEMA_VERSION.to_string()
    }
}
