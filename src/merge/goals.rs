//! Goals merge - override-aware, with two field-specific rules
//!
//! `current` takes the FIRST non-empty value in merge order, which
//! inverts the usual highest-wins precedence. Intentional: a goal set
//! at a broad scope stays current until it is cleared there.
//! `priorities` is replace-whole: each non-empty list supersedes the
//! previous one entirely.

use crate::layer::{GoalsFragment, GoalsLayer};

use super::{concat_text, dedup_concat, override_suffix};

/// Merge goals fragments, lowest precedence first.
pub fn merge_goals(fragments: &[&GoalsFragment]) -> GoalsLayer {
    let active = override_suffix(fragments, |f| f.override_lower);

    // First non-empty wins, scanning the truncated list in caller order
    let current = active
        .iter()
        .find_map(|f| f.current.as_deref().filter(|s| !s.trim().is_empty()))
        .map(|s| s.to_string());

    // Replace-whole: the last non-empty list stands
    let priorities = active
        .iter()
        .rev()
        .find(|f| !f.priorities.is_empty())
        .map(|f| f.priorities.clone())
        .unwrap_or_default();

    GoalsLayer {
        current,
        success_criteria: dedup_concat(active.iter().map(|f| f.success_criteria.as_slice())),
        priorities,
        raw_content: concat_text(active.iter().map(|f| f.raw_content.as_deref())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goals(current: Option<&str>, override_lower: bool) -> GoalsFragment {
        GoalsFragment {
            override_lower,
            current: current.map(|s| s.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input_yields_empty_fragment() {
        assert!(merge_goals(&[]).is_empty());
    }

    #[test]
    fn test_current_first_non_empty_wins() {
        // System first (lowest precedence) - and it still wins
        let system = goals(Some("A"), false);
        let project = goals(Some("B"), false);

        let merged = merge_goals(&[&system, &project]);
        assert_eq!(merged.current.as_deref(), Some("A"));
    }

    #[test]
    fn test_current_skips_blank_values() {
        let a = goals(Some("   "), false);
        let b = goals(Some("ship login"), false);

        let merged = merge_goals(&[&a, &b]);
        assert_eq!(merged.current.as_deref(), Some("ship login"));
    }

    #[test]
    fn test_override_truncation_applies_before_first_wins() {
        let system = goals(Some("old goal"), false);
        let project = goals(Some("new goal"), true);

        let merged = merge_goals(&[&system, &project]);
        assert_eq!(merged.current.as_deref(), Some("new goal"));
    }

    #[test]
    fn test_priorities_replace_whole() {
        let a = GoalsFragment {
            priorities: vec!["stability".to_string(), "speed".to_string()],
            ..Default::default()
        };
        let b = GoalsFragment {
            priorities: vec!["launch".to_string()],
            ..Default::default()
        };
        let c = GoalsFragment::default();

        // Empty list in c does not clear b's value
        let merged = merge_goals(&[&a, &b, &c]);
        assert_eq!(merged.priorities, vec!["launch".to_string()]);
    }

    #[test]
    fn test_success_criteria_accumulate() {
        let a = GoalsFragment {
            success_criteria: vec!["tests pass".to_string()],
            ..Default::default()
        };
        let b = GoalsFragment {
            success_criteria: vec!["tests pass".to_string(), "docs updated".to_string()],
            ..Default::default()
        };

        let merged = merge_goals(&[&a, &b]);
        assert_eq!(merged.success_criteria.len(), 2);
    }

    #[test]
    fn test_raw_content_restarts_at_override() {
        let below = GoalsFragment {
            raw_content: Some("discarded".to_string()),
            ..Default::default()
        };
        let boundary = GoalsFragment {
            override_lower: true,
            raw_content: Some("kept".to_string()),
            ..Default::default()
        };

        let merged = merge_goals(&[&below, &boundary]);
        assert_eq!(merged.raw_content.as_deref(), Some("kept"));
    }
}
