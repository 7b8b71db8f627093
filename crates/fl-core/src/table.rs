//! Validated in-memory applicant table.
//!
//! Construction validates eagerly (duplicate ids, non-finite scores, empty
//! subgroup labels) and builds the subgroup index once, so every downstream
//! component can assume a well-formed snapshot.

use fl_common::{ApplicantId, Error, Result, SubgroupKey};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// One input row: a scored applicant in exactly one protected subgroup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,
    /// Creditworthiness merit score; higher = more creditworthy. Ties are
    /// allowed and no range is assumed.
    pub score: f64,
    pub subgroup: SubgroupKey,
}

/// Immutable snapshot of the applicant population with a subgroup index.
///
/// The index maps each subgroup label to the ordered list of row positions of
/// its members, so per-subgroup passes never rescan the whole table.
#[derive(Debug, Clone)]
pub struct ApplicantTable {
    applicants: Vec<Applicant>,
    by_subgroup: BTreeMap<SubgroupKey, Vec<usize>>,
}

impl ApplicantTable {
    /// Validate rows and build the subgroup index.
    ///
    /// Fails before any computation begins: tie-break determinism depends on
    /// unique ids, and ranking depends on finite scores.
    pub fn new(applicants: Vec<Applicant>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(applicants.len());
        for applicant in &applicants {
            if !applicant.score.is_finite() {
                return Err(Error::NonFiniteScore {
                    id: applicant.id,
                    value: applicant.score,
                });
            }
            if applicant.subgroup.is_empty() {
                return Err(Error::EmptySubgroup { id: applicant.id });
            }
            if !seen.insert(applicant.id) {
                return Err(Error::DuplicateId { id: applicant.id });
            }
        }

        let mut by_subgroup: BTreeMap<SubgroupKey, Vec<usize>> = BTreeMap::new();
        for (idx, applicant) in applicants.iter().enumerate() {
            by_subgroup
                .entry(applicant.subgroup.clone())
                .or_default()
                .push(idx);
        }

        Ok(ApplicantTable {
            applicants,
            by_subgroup,
        })
    }

    pub fn len(&self) -> usize {
        self.applicants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applicants.is_empty()
    }

    pub fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }

    /// Subgroups in deterministic (lexicographic) order, each with the
    /// ordered row positions of its members. Every listed subgroup has at
    /// least one member.
    pub fn subgroups(&self) -> impl Iterator<Item = (&SubgroupKey, &[usize])> {
        self.by_subgroup
            .iter()
            .map(|(key, members)| (key, members.as_slice()))
    }

    pub fn subgroup_count(&self) -> usize {
        self.by_subgroup.len()
    }

    /// The whole population as (id, score) pairs, in table order.
    pub fn scores(&self) -> Vec<(ApplicantId, f64)> {
        self.applicants.iter().map(|a| (a.id, a.score)).collect()
    }

    /// (id, score) pairs for the given row positions, in the given order.
    pub fn scores_at(&self, rows: &[usize]) -> Vec<(ApplicantId, f64)> {
        rows.iter()
            .map(|&idx| (self.applicants[idx].id, self.applicants[idx].score))
            .collect()
    }
}
