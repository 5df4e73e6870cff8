//! Methods layer - workflows, patterns, and recorded decisions
//!
//! Override strategy: a scope that sets `override: true` replaces
//! every lower-precedence contribution. The flag exists only on
//! [`MethodsFragment`]; the merged [`MethodsLayer`] has no such field.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named workflow, keyed by `name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Workflow {
    /// Unique name within the merged workflow set
    pub name: String,

    /// What the workflow accomplishes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ordered steps
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
}

/// Methods content contributed by one scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MethodsFragment {
    /// When true, discard all lower-precedence methods content
    #[serde(default, rename = "override")]
    pub override_lower: bool,

    /// Workflows, keyed by name
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workflows: Vec<Workflow>,

    /// Recurring patterns and conventions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,

    /// Decision name to rationale
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub decisions: BTreeMap<String, String>,

    /// Checklist name to content
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub checklists: BTreeMap<String, String>,

    /// Free-form method notes from the file body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

/// Merged methods content. Structurally cannot carry an override flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MethodsLayer {
    /// Workflows, keyed by name
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workflows: Vec<Workflow>,

    /// Recurring patterns and conventions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,

    /// Decision name to rationale
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub decisions: BTreeMap<String, String>,

    /// Checklist name to content
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub checklists: BTreeMap<String, String>,

    /// Free-form method notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

impl MethodsLayer {
    /// True when no field carries content
    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
            && self.patterns.is_empty()
            && self.decisions.is_empty()
            && self.checklists.is_empty()
            && !self
                .raw_content
                .as_deref()
                .is_some_and(|s| !s.trim().is_empty())
    }

    /// Look up a workflow by name
    pub fn workflow(&self, name: &str) -> Option<&Workflow> {
        self.workflows.iter().find(|w| w.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(MethodsLayer::default().is_empty());
        assert!(!MethodsFragment::default().override_lower);
    }

    #[test]
    fn test_override_key_name() {
        let yaml = "override: true\npatterns:\n  - tdd\n";
        let fragment: MethodsFragment = serde_yaml::from_str(yaml).unwrap();
        assert!(fragment.override_lower);
        assert_eq!(fragment.patterns, vec!["tdd".to_string()]);
    }

    #[test]
    fn test_merged_layer_has_no_override_key() {
        let json = serde_json::to_string(&MethodsLayer {
            patterns: vec!["tdd".to_string()],
            ..Default::default()
        })
        .unwrap();
        assert!(!json.contains("override"));
    }
}
