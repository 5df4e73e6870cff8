//! Conflict value objects and the derived health score

use serde::{Deserialize, Serialize};

use crate::layer::LayerType;
use crate::scope::ScopeLevel;

/// Severity classification of a detected configuration problem.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// One detected configuration problem. Immutable value object,
/// produced in batches by the detector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conflict {
    /// Identifier, unique within one detection run
    pub id: String,

    /// The layer the problem lives in (cross-layer checks are tagged
    /// with the layer whose text triggered them)
    pub layer: LayerType,

    pub severity: Severity,

    /// Human-readable description
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Scopes implicated in the problem
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<ScopeLevel>,
}

/// Health score for a conflict list: start at 100, subtract 15 per
/// error, 5 per warning, 1 per info, floor at 0.
pub fn health_score(conflicts: &[Conflict]) -> u8 {
    let mut score: i32 = 100;
    for conflict in conflicts {
        score -= match conflict.severity {
            Severity::Error => 15,
            Severity::Warning => 5,
            Severity::Info => 1,
        };
    }
    score.max(0) as u8
}

/// Detection output: the canonical conflict list in check order plus
/// the derived health score. Severity groupings are views, not a
/// reordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConflictReport {
    pub conflicts: Vec<Conflict>,
    pub health_score: u8,
}

impl ConflictReport {
    /// Build a report, computing the health score from the list
    pub fn from_conflicts(conflicts: Vec<Conflict>) -> Self {
        let health_score = health_score(&conflicts);
        Self {
            conflicts,
            health_score,
        }
    }

    /// Conflicts of one severity, in canonical order
    pub fn by_severity(&self, severity: Severity) -> Vec<&Conflict> {
        self.conflicts
            .iter()
            .filter(|c| c.severity == severity)
            .collect()
    }

    pub fn errors(&self) -> Vec<&Conflict> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> Vec<&Conflict> {
        self.by_severity(Severity::Warning)
    }

    pub fn infos(&self) -> Vec<&Conflict> {
        self.by_severity(Severity::Info)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    /// Serialize to pretty JSON for the CLI
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
