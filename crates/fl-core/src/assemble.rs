//! Result assembly: package both policies' decisions and reports into the
//! payload handed to external consumers.
//!
//! Packaging only. Run identity is captured by the caller (see
//! [`RunMeta::capture`]) so this stays deterministic and the engine remains a
//! pure function of its inputs.

use crate::engine::PolicyRun;
use fl_common::{AnalysisResult, FairnessReport, PolicyResult, RunMeta};

/// Combine both policy runs and their fairness reports into one
/// [`AnalysisResult`]. Nothing produced upstream is dropped or renamed.
pub fn assemble(
    meta: RunMeta,
    target_rate: f64,
    population: usize,
    opportunity: PolicyRun,
    opportunity_report: FairnessReport,
    outcomes: PolicyRun,
    outcomes_report: FairnessReport,
) -> AnalysisResult {
    AnalysisResult {
        schema_version: AnalysisResult::current_schema_version(),
        run_id: meta.run_id,
        generated_at: meta.generated_at,
        target_rate,
        population,
        opportunity: package(opportunity, opportunity_report),
        outcomes: package(outcomes, outcomes_report),
    }
}

fn package(run: PolicyRun, report: FairnessReport) -> PolicyResult {
    PolicyResult {
        policy: run.policy,
        cutoffs: run.cutoffs,
        decisions: run.decisions,
        report,
    }
}
