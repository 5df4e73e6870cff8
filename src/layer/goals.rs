//! Goals layer - current objective, success criteria, priorities
//!
//! Override strategy, like Methods. One documented quirk: the merged
//! `current` goal is the FIRST non-empty value in merge order, not the
//! last (see `merge::goals`).

use serde::{Deserialize, Serialize};

/// Goals content contributed by one scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GoalsFragment {
    /// When true, discard all lower-precedence goals content
    #[serde(default, rename = "override")]
    pub override_lower: bool,

    /// The current objective
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,

    /// How we know the current objective is done
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub success_criteria: Vec<String>,

    /// Ranked priorities; replaces, not merges, across scopes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub priorities: Vec<String>,

    /// Free-form goal notes from the file body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

/// Merged goals content. Structurally cannot carry an override flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GoalsLayer {
    /// The current objective
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,

    /// How we know the current objective is done
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub success_criteria: Vec<String>,

    /// Ranked priorities
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub priorities: Vec<String>,

    /// Free-form goal notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

impl GoalsLayer {
    /// True when no field carries content
    pub fn is_empty(&self) -> bool {
        fn blank(text: &Option<String>) -> bool {
            !text.as_deref().is_some_and(|s| !s.trim().is_empty())
        }

        blank(&self.current)
            && self.success_criteria.is_empty()
            && self.priorities.is_empty()
            && blank(&self.raw_content)
    }

    /// The current goal text, treating blank as absent
    pub fn current_text(&self) -> Option<&str> {
        self.current.as_deref().filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(GoalsLayer::default().is_empty());
    }

    #[test]
    fn test_current_text_blank() {
        let layer = GoalsLayer {
            current: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(layer.current_text().is_none());
        assert!(layer.is_empty());
    }

    #[test]
    fn test_override_key_name() {
        let yaml = "override: true\ncurrent: ship login\n";
        let fragment: GoalsFragment = serde_yaml::from_str(yaml).unwrap();
        assert!(fragment.override_lower);
        assert_eq!(fragment.current.as_deref(), Some("ship login"));
    }
}
