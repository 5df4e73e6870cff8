//! Resolution context - merged result plus the originals it came from

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::scope::{ScopeConfig, ScopeLevel};

use super::{resolve_config_at, MergedConfig};

/// A full resolution: the merged configuration, the per-scope inputs
/// it was derived from, a creation timestamp, and an optional task
/// identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolutionContext {
    pub merged: MergedConfig,

    /// The original per-scope inputs, keyed by level
    pub scopes: BTreeMap<ScopeLevel, ScopeConfig>,

    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

impl ResolutionContext {
    /// Build a context from up to four named per-scope configs. Each
    /// config's scope level is forced to match its parameter slot.
    pub fn build(
        task: Option<ScopeConfig>,
        project: Option<ScopeConfig>,
        user: Option<ScopeConfig>,
        system: Option<ScopeConfig>,
    ) -> Self {
        Self::build_at(task, project, user, system, Utc::now())
    }

    /// [`Self::build`] with an injected timestamp
    pub fn build_at(
        task: Option<ScopeConfig>,
        project: Option<ScopeConfig>,
        user: Option<ScopeConfig>,
        system: Option<ScopeConfig>,
        now: DateTime<Utc>,
    ) -> Self {
        let slots = [
            (ScopeLevel::Task, task),
            (ScopeLevel::Project, project),
            (ScopeLevel::User, user),
            (ScopeLevel::System, system),
        ];

        let mut scopes = BTreeMap::new();
        for (level, slot) in slots {
            if let Some(mut config) = slot {
                config.scope = level;
                scopes.insert(level, config);
            }
        }

        let configs: Vec<ScopeConfig> = scopes.values().cloned().collect();
        let merged = resolve_config_at(&configs, now);

        Self {
            merged,
            scopes,
            created_at: now,
            task_id: None,
        }
    }

    /// Attach a task identifier
    pub fn with_task_id(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    /// Count of distinct scopes that supplied any config
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::RulesLayer;

    #[test]
    fn test_build_with_no_scopes() {
        let ctx = ResolutionContext::build(None, None, None, None);
        assert_eq!(ctx.scope_count(), 0);
        assert!(ctx.merged.metadata.scopes_included.is_empty());
        assert!(ctx.task_id.is_none());
    }

    #[test]
    fn test_build_forces_scope_levels() {
        // Mislabelled config lands in the project slot; the slot wins
        let mislabelled = ScopeConfig::new(ScopeLevel::System, "/repo/.ctx");

        let ctx = ResolutionContext::build(None, Some(mislabelled), None, None);
        assert!(ctx.scopes.contains_key(&ScopeLevel::Project));
        assert_eq!(
            ctx.merged.metadata.scopes_included,
            vec![ScopeLevel::Project]
        );
    }

    #[test]
    fn test_build_resolves_merged_result() {
        let project = ScopeConfig::new(ScopeLevel::Project, "/repo/.ctx").with_rules(RulesLayer {
            security: vec!["no secrets".to_string()],
            ..Default::default()
        });

        let ctx = ResolutionContext::build(None, Some(project), None, None)
            .with_task_id("TASK-42");

        assert_eq!(ctx.task_id.as_deref(), Some("TASK-42"));
        assert!(ctx.merged.rules.security.contains(&"no secrets".to_string()));
    }

    #[test]
    fn test_created_at_matches_merge_timestamp() {
        let fixed = "2026-01-02T03:04:05Z".parse().unwrap();
        let ctx = ResolutionContext::build_at(None, None, None, None, fixed);
        assert_eq!(ctx.created_at, fixed);
        assert_eq!(ctx.merged.metadata.merged_at, fixed);
    }
}
