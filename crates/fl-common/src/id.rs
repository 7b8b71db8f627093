//! Applicant, subgroup, and run identity types.
//!
//! An applicant is uniquely identified by its id within one table; the
//! ascending-id tie-break at threshold boundaries depends on that uniqueness.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Applicant ID wrapper with display formatting.
///
/// Either a natural key from the input dataset or the 1-based row position
/// when the dataset carries none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicantId(pub u64);

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ApplicantId {
    fn from(id: u64) -> Self {
        ApplicantId(id)
    }
}

/// Subgroup label formed by combining protected attributes
/// (e.g. "Black Female"). Opaque to the engine; never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubgroupKey(pub String);

impl SubgroupKey {
    pub fn new(label: impl Into<String>) -> Self {
        SubgroupKey(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SubgroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SubgroupKey {
    fn from(label: &str) -> Self {
        SubgroupKey(label.to_string())
    }
}

/// Run ID for tracking analysis runs.
///
/// Format: `run-<date>-<time>-<random>`
/// Example: `run-20260806-143022-abc123`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(pub String);

impl RunId {
    /// Generate a new run ID.
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        let random: String = uuid::Uuid::new_v4().to_string().chars().take(6).collect();
        RunId(format!("run-{}-{}", now.format("%Y%m%d-%H%M%S"), random))
    }

    /// Parse an existing run ID string.
    pub fn parse(s: &str) -> Option<Self> {
        if s.starts_with("run-") && s.len() > 19 {
            Some(RunId(s.to_string()))
        } else {
            None
        }
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_id_format() {
        let rid = RunId::new();
        assert!(rid.0.starts_with("run-"));
        assert!(rid.0.len() > 19);
        assert!(RunId::parse(&rid.0).is_some());
    }

    #[test]
    fn test_run_id_parse_rejects_foreign_strings() {
        assert!(RunId::parse("sess-20260806-143022-abc123").is_none());
        assert!(RunId::parse("run-short").is_none());
    }

    #[test]
    fn test_applicant_id_ordering() {
        assert!(ApplicantId(1) < ApplicantId(2));
        assert_eq!(ApplicantId(5).to_string(), "5");
    }

    #[test]
    fn test_subgroup_key_transparent_serde() {
        let key = SubgroupKey::new("Black Female");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"Black Female\"");
    }
}
