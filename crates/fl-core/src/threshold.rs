//! Threshold solver: exact-count approval selection from scored applicants.
//!
//! Given a population of (id, score) pairs and a target approval rate, the
//! solver picks the cutoff and the exact approved set realizing that rate as
//! closely as an integer count permits. It is pure and policy-agnostic; the
//! decision engine invokes it once per population or once per subgroup.

use fl_common::{ApplicantId, Cutoff, Error, Result};
use serde::Serialize;
use std::collections::BTreeSet;

/// Outcome of one threshold computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdResult {
    /// Minimum score required for approval.
    pub cutoff: Cutoff,
    /// Approved applicant ids; exactly `target_count` of them.
    pub approved_ids: BTreeSet<ApplicantId>,
    /// `round_half_up(target_rate × population)`, clamped to the population.
    pub target_count: usize,
    /// `|approved_ids| / population`; 0.0 for the empty population.
    pub achieved_rate: f64,
}

/// Round a non-negative quantity half-up to an integer count.
///
/// `f64::round` rounds half away from zero, which coincides with half-up for
/// the non-negative products used here. Applied exactly once per solve so the
/// same inputs always yield the same count.
pub fn round_half_up(x: f64) -> usize {
    x.round() as usize
}

/// Check a requested approval rate.
pub fn validate_rate(target_rate: f64) -> Result<()> {
    if !target_rate.is_finite() || !(0.0..=1.0).contains(&target_rate) {
        return Err(Error::InvalidRate { value: target_rate });
    }
    Ok(())
}

/// Compute the approval cutoff and approved set for one population.
///
/// Applicants are ranked by score descending; ties at the boundary are broken
/// by ascending id, so the approved set has exactly `target_count` members and
/// is identical across runs regardless of input order.
///
/// The empty population is a degenerate success at any valid rate: a zero
/// target count and a zero achieved rate, not an error.
pub fn solve(scores: &[(ApplicantId, f64)], target_rate: f64) -> Result<ThresholdResult> {
    validate_rate(target_rate)?;

    let population = scores.len();
    if population == 0 {
        return Ok(ThresholdResult {
            cutoff: Cutoff::Unattainable,
            approved_ids: BTreeSet::new(),
            target_count: 0,
            achieved_rate: 0.0,
        });
    }

    let target_count = round_half_up(target_rate * population as f64).min(population);

    let mut ranked: Vec<(ApplicantId, f64)> = scores.to_vec();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let approved_ids: BTreeSet<ApplicantId> =
        ranked.iter().take(target_count).map(|&(id, _)| id).collect();

    let cutoff = if target_count == 0 {
        Cutoff::Unattainable
    } else if target_count == population {
        Cutoff::Open
    } else {
        Cutoff::At(ranked[target_count - 1].1)
    };

    Ok(ThresholdResult {
        cutoff,
        approved_ids,
        target_count,
        achieved_rate: target_count as f64 / population as f64,
    })
}
