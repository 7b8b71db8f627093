//! Fairness aggregation: per-subgroup approval statistics and cross-subgroup
//! disparity metrics for one policy's decision set.

use crate::table::ApplicantTable;
use fl_common::{ApplicantId, Decision, FairnessReport, SubgroupKey, SubgroupStats};
use std::collections::{BTreeMap, HashSet};

/// Aggregate one policy's decisions into a [`FairnessReport`].
///
/// Pure function of its inputs: one entry per subgroup present in the table,
/// plus the disparate impact ratio (min rate / max rate, 1.0 when every rate
/// is zero) and the max rate gap.
pub fn aggregate(decisions: &[Decision], table: &ApplicantTable) -> FairnessReport {
    let approved: HashSet<ApplicantId> = decisions
        .iter()
        .filter(|d| d.approved)
        .map(|d| d.applicant_id)
        .collect();

    let mut subgroups = BTreeMap::new();
    for (key, members) in table.subgroups() {
        let size = members.len();
        let approved_count = members
            .iter()
            .filter(|&&idx| approved.contains(&table.applicants()[idx].id))
            .count();
        subgroups.insert(
            key.clone(),
            SubgroupStats {
                size,
                approved_count,
                approval_rate: approved_count as f64 / size as f64,
            },
        );
    }

    let (disparate_impact_ratio, max_rate_gap) = disparity(&subgroups);
    FairnessReport {
        subgroups,
        disparate_impact_ratio,
        max_rate_gap,
    }
}

fn disparity(subgroups: &BTreeMap<SubgroupKey, SubgroupStats>) -> (f64, f64) {
    let mut min_rate = f64::INFINITY;
    let mut max_rate = f64::NEG_INFINITY;
    for stats in subgroups.values() {
        min_rate = min_rate.min(stats.approval_rate);
        max_rate = max_rate.max(stats.approval_rate);
    }

    if subgroups.is_empty() {
        return (1.0, 0.0);
    }
    if max_rate == 0.0 {
        // Every rate is zero: no disparity, vacuously.
        return (1.0, 0.0);
    }
    (min_rate / max_rate, max_rate - min_rate)
}
