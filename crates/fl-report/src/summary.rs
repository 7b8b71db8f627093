//! Fixed-width text summary of an analysis run.

use fl_common::{AnalysisResult, CutoffSet, PolicyResult};

const TABLE_RULE: &str =
    "---------------------+------------+--------------+----------+-------";

/// Render the complete text summary for both policies.
pub fn render_summary(result: &AnalysisResult) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("Fair Lending Analysis".to_string());
    lines.push("=====================".to_string());
    lines.push(format!("Run:         {}", result.run_id));
    lines.push(format!("Schema:      {}", result.schema_version));
    lines.push(format!(
        "Generated:   {}",
        result.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines.push(format!("Applicants:  {}", result.population));
    lines.push(format!("Target rate: {:.1}%", result.target_rate * 100.0));
    lines.push(String::new());

    push_policy_section(&mut lines, &result.opportunity);
    lines.push(String::new());
    push_policy_section(&mut lines, &result.outcomes);
    lines.push(String::new());

    lines.push(
        "A disparate impact ratio of 1.0 indicates parity: every subgroup is approved at the \
         same rate."
            .to_string(),
    );
    lines.push(
        "Lower values signal greater disparity between the most- and least-approved subgroups."
            .to_string(),
    );
    lines.push(String::new());

    lines.join("\n")
}

fn push_policy_section(lines: &mut Vec<String>, policy: &PolicyResult) {
    let heading = policy.policy.label();
    lines.push(heading.to_string());
    lines.push("-".repeat(heading.len()));

    lines.push(format!(
        "{:<20} | {:>10} | {:>12} | {:>8} | {:>6}",
        "Group", "Applicants", "Cutoff", "Approved", "Rate"
    ));
    lines.push(TABLE_RULE.to_string());

    for (key, stats) in &policy.report.subgroups {
        let cutoff = match &policy.cutoffs {
            CutoffSet::Global(summary) => summary.cutoff.to_string(),
            CutoffSet::PerSubgroup(cutoffs) => cutoffs
                .get(key)
                .map(|summary| summary.cutoff.to_string())
                .unwrap_or_else(|| "-".to_string()),
        };
        lines.push(format!(
            "{:<20} | {:>10} | {:>12} | {:>8} | {:>5.1}%",
            key.as_str(),
            stats.size,
            cutoff,
            stats.approved_count,
            stats.approval_rate * 100.0
        ));
    }

    if let CutoffSet::Global(summary) = &policy.cutoffs {
        lines.push(format!(
            "Global cutoff: {} (target {}, approved {}, achieved {:.1}%)",
            summary.cutoff,
            summary.target_count,
            summary.approved_count,
            summary.achieved_rate * 100.0
        ));
    }

    lines.push(format!(
        "Disparate impact ratio: {:.3}",
        policy.report.disparate_impact_ratio
    ));
    lines.push(format!(
        "Max rate gap: {:.1}%",
        policy.report.max_rate_gap * 100.0
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use fl_common::{
        ApplicantId, Cutoff, CutoffSummary, Decision, FairnessReport, Policy, RunId, SubgroupStats,
    };
    use std::collections::BTreeMap;

    fn fixture() -> AnalysisResult {
        let mut subgroups = BTreeMap::new();
        subgroups.insert(
            "Black Female".into(),
            SubgroupStats {
                size: 2,
                approved_count: 0,
                approval_rate: 0.0,
            },
        );
        subgroups.insert(
            "White Male".into(),
            SubgroupStats {
                size: 2,
                approved_count: 2,
                approval_rate: 1.0,
            },
        );
        let opportunity_report = FairnessReport {
            subgroups: subgroups.clone(),
            disparate_impact_ratio: 0.0,
            max_rate_gap: 1.0,
        };

        let mut outcome_subgroups = BTreeMap::new();
        for key in ["Black Female", "White Male"] {
            outcome_subgroups.insert(
                key.into(),
                SubgroupStats {
                    size: 2,
                    approved_count: 1,
                    approval_rate: 0.5,
                },
            );
        }
        let outcomes_report = FairnessReport {
            subgroups: outcome_subgroups,
            disparate_impact_ratio: 1.0,
            max_rate_gap: 0.0,
        };

        let decisions = |policy: Policy| -> Vec<Decision> {
            (1..=4)
                .map(|id| Decision {
                    applicant_id: ApplicantId(id),
                    approved: id <= 2,
                    policy,
                })
                .collect()
        };

        let mut per_subgroup = BTreeMap::new();
        for key in ["Black Female", "White Male"] {
            per_subgroup.insert(
                key.into(),
                CutoffSummary {
                    cutoff: Cutoff::At(0.75),
                    target_count: 1,
                    approved_count: 1,
                    achieved_rate: 0.5,
                },
            );
        }

        AnalysisResult {
            schema_version: "1.0.0".to_string(),
            run_id: RunId("run-20260806-120000-abc123".to_string()),
            generated_at: Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap(),
            target_rate: 0.5,
            population: 4,
            opportunity: PolicyResult {
                policy: Policy::Opportunity,
                cutoffs: CutoffSet::Global(CutoffSummary {
                    cutoff: Cutoff::At(0.8),
                    target_count: 2,
                    approved_count: 2,
                    achieved_rate: 0.5,
                }),
                decisions: decisions(Policy::Opportunity),
                report: opportunity_report,
            },
            outcomes: PolicyResult {
                policy: Policy::Outcomes,
                cutoffs: CutoffSet::PerSubgroup(per_subgroup),
                decisions: decisions(Policy::Outcomes),
                report: outcomes_report,
            },
        }
    }

    #[test]
    fn summary_contains_both_policy_sections() {
        let text = render_summary(&fixture());
        assert!(text.contains("Equality of Opportunity"));
        assert!(text.contains("Equality of Outcomes"));
        assert!(text.contains("run-20260806-120000-abc123"));
        assert!(text.contains("Target rate: 50.0%"));
    }

    #[test]
    fn summary_reports_per_group_rows_and_metrics() {
        let text = render_summary(&fixture());
        assert!(text.contains("White Male"));
        assert!(text.contains("Black Female"));
        assert!(text.contains("Disparate impact ratio: 0.000"));
        assert!(text.contains("Disparate impact ratio: 1.000"));
        assert!(text.contains("Max rate gap: 100.0%"));
        assert!(text.contains("Global cutoff: 0.8000 (target 2, approved 2, achieved 50.0%)"));
    }

    #[test]
    fn summary_ends_with_interpretation() {
        let text = render_summary(&fixture());
        assert!(text.contains("indicates parity"));
    }
}
