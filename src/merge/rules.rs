//! Rules merge - fully additive

use crate::layer::RulesLayer;

use super::{concat_text, dedup_concat};

/// Merge rules fragments, lowest precedence first.
///
/// Every list field concatenates and deduplicates; `raw_content`
/// concatenates with a divider. Nothing is discarded.
pub fn merge_rules(fragments: &[&RulesLayer]) -> RulesLayer {
    RulesLayer {
        security: dedup_concat(fragments.iter().map(|f| f.security.as_slice())),
        output_requirements: dedup_concat(
            fragments.iter().map(|f| f.output_requirements.as_slice()),
        ),
        forbidden: dedup_concat(fragments.iter().map(|f| f.forbidden.as_slice())),
        required: dedup_concat(fragments.iter().map(|f| f.required.as_slice())),
        compliance: dedup_concat(fragments.iter().map(|f| f.compliance.as_slice())),
        raw_content: concat_text(fragments.iter().map(|f| f.raw_content.as_deref())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(security: &[&str], forbidden: &[&str]) -> RulesLayer {
        RulesLayer {
            security: security.iter().map(|s| s.to_string()).collect(),
            forbidden: forbidden.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input_yields_empty_fragment() {
        assert!(merge_rules(&[]).is_empty());
    }

    #[test]
    fn test_lists_accumulate_across_fragments() {
        let system = rules(&["no secrets"], &[]);
        let project = rules(&[], &["delete prod db"]);

        let merged = merge_rules(&[&system, &project]);
        assert!(merged.security.contains(&"no secrets".to_string()));
        assert!(merged.forbidden.contains(&"delete prod db".to_string()));
    }

    #[test]
    fn test_duplicates_collapse() {
        let a = rules(&["no secrets", "review deps"], &[]);
        let b = rules(&["no secrets"], &[]);

        let merged = merge_rules(&[&a, &b]);
        assert_eq!(merged.security.len(), 2);
    }

    #[test]
    fn test_merge_idempotent_for_lists() {
        let a = rules(&["no secrets"], &["rm -rf"]);

        let once = merge_rules(&[&a]);
        let twice = merge_rules(&[&a, &a]);
        assert_eq!(once.security, twice.security);
        assert_eq!(once.forbidden, twice.forbidden);
    }

    #[test]
    fn test_raw_content_concatenates() {
        let a = RulesLayer {
            raw_content: Some("system rules".to_string()),
            ..Default::default()
        };
        let b = RulesLayer {
            raw_content: Some("project rules".to_string()),
            ..Default::default()
        };

        let merged = merge_rules(&[&a, &b]);
        let text = merged.raw_content.unwrap();
        assert!(text.starts_with("system rules"));
        assert!(text.ends_with("project rules"));
    }
}
