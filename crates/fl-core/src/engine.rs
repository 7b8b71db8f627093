//! Decision engine: policy orchestration over the threshold solver.
//!
//! The only component with policy-specific branching. OPPORTUNITY solves once
//! over the whole population; OUTCOMES solves once per subgroup and takes the
//! union of the per-subgroup approved sets, so two applicants with identical
//! scores in different subgroups may receive different decisions. That
//! trade-off is the point of running both policies side by side.

use crate::table::ApplicantTable;
use crate::threshold::{self, ThresholdResult};
use fl_common::{
    ApplicantId, CutoffSet, CutoffSummary, Decision, Policy, Result, SubgroupKey,
};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Everything one policy execution produced: per-applicant decisions in table
/// order plus the cutoff audit trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyRun {
    pub policy: Policy,
    pub decisions: Vec<Decision>,
    pub cutoffs: CutoffSet,
}

/// Execute one policy over the table.
///
/// Emits one [`Decision`] per applicant, in table order, each tagged with the
/// policy that produced it. Running both policies yields two independent
/// decision sequences; policies are never mixed within one sequence.
pub fn run_policy(table: &ApplicantTable, target_rate: f64, policy: Policy) -> Result<PolicyRun> {
    threshold::validate_rate(target_rate)?;

    let (approved, cutoffs) = match policy {
        Policy::Opportunity => {
            let solved = threshold::solve(&table.scores(), target_rate)?;
            let summary = summarize(&solved);
            (solved.approved_ids, CutoffSet::Global(summary))
        }
        Policy::Outcomes => {
            let mut approved = BTreeSet::new();
            let mut cutoffs: BTreeMap<SubgroupKey, CutoffSummary> = BTreeMap::new();
            for (key, members) in table.subgroups() {
                let solved = threshold::solve(&table.scores_at(members), target_rate)?;
                cutoffs.insert(key.clone(), summarize(&solved));
                approved.extend(solved.approved_ids);
            }
            (approved, CutoffSet::PerSubgroup(cutoffs))
        }
    };

    Ok(PolicyRun {
        policy,
        decisions: decisions_in_table_order(table, &approved, policy),
        cutoffs,
    })
}

/// The decisions alone, for callers that do not need the cutoff audit trail.
pub fn decide(
    table: &ApplicantTable,
    target_rate: f64,
    policy: Policy,
) -> Result<Vec<Decision>> {
    run_policy(table, target_rate, policy).map(|run| run.decisions)
}

fn summarize(solved: &ThresholdResult) -> CutoffSummary {
    CutoffSummary {
        cutoff: solved.cutoff,
        target_count: solved.target_count,
        approved_count: solved.approved_ids.len(),
        achieved_rate: solved.achieved_rate,
    }
}

fn decisions_in_table_order(
    table: &ApplicantTable,
    approved: &BTreeSet<ApplicantId>,
    policy: Policy,
) -> Vec<Decision> {
    table
        .applicants()
        .iter()
        .map(|applicant| Decision {
            applicant_id: applicant.id,
            approved: approved.contains(&applicant.id),
            policy,
        })
        .collect()
}
