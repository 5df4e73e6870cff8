//! Resolution of per-scope configurations into one merged configuration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::layer::{LayerType, LAYER_TYPES};
use crate::merge::{merge_goals, merge_knowledge, merge_methods, merge_rules, merge_tools};
use crate::scope::{sort_descending, ScopeConfig, ScopeLevel};

use super::{MergeMetadata, MergedConfig};

/// Resolve per-scope configurations into one merged configuration,
/// stamped with the current time.
pub fn resolve_config(configs: &[ScopeConfig]) -> MergedConfig {
    resolve_config_at(configs, Utc::now())
}

/// Resolve with an injected timestamp. This is the real
/// implementation; [`resolve_config`] is a thin wrapper around it.
///
/// Configs are sorted highest precedence first for the metadata, then
/// reversed to lowest-first before merging, so the merge engine's
/// "last wins" equals "highest precedence wins".
pub fn resolve_config_at(configs: &[ScopeConfig], now: DateTime<Utc>) -> MergedConfig {
    let mut ordered: Vec<ScopeConfig> = configs.to_vec();
    sort_descending(&mut ordered);

    let scopes_included: Vec<ScopeLevel> = ordered.iter().map(|c| c.scope).collect();

    let mut layer_sources: BTreeMap<LayerType, Vec<String>> = BTreeMap::new();
    for layer in LAYER_TYPES {
        let sources: Vec<String> = ordered
            .iter()
            .filter(|c| c.has_fragment(layer))
            .map(|c| c.base_path.clone())
            .collect();
        layer_sources.insert(layer, sources);
    }

    // Lowest precedence first for the merge
    ordered.reverse();

    let rules: Vec<_> = ordered.iter().filter_map(|c| c.rules.as_ref()).collect();
    let tools: Vec<_> = ordered.iter().filter_map(|c| c.tools.as_ref()).collect();
    let methods: Vec<_> = ordered.iter().filter_map(|c| c.methods.as_ref()).collect();
    let knowledge: Vec<_> = ordered
        .iter()
        .filter_map(|c| c.knowledge.as_ref())
        .collect();
    let goals: Vec<_> = ordered.iter().filter_map(|c| c.goals.as_ref()).collect();

    MergedConfig {
        rules: merge_rules(&rules),
        tools: merge_tools(&tools),
        methods: merge_methods(&methods),
        knowledge: merge_knowledge(&knowledge),
        goals: merge_goals(&goals),
        metadata: MergeMetadata {
            merged_at: now,
            scopes_included,
            layer_sources,
        },
    }
}

/// Which scopes and source paths contributed to one layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayerProvenance {
    pub layer: LayerType,

    /// Contributing scopes, highest precedence first
    pub scopes: Vec<ScopeLevel>,

    /// Base paths of the contributing configs, same order
    pub sources: Vec<String>,
}

/// Summarize, per layer, which scopes and source paths supplied a
/// fragment (present, not necessarily non-empty).
pub fn layer_provenance(configs: &[ScopeConfig]) -> Vec<LayerProvenance> {
    let mut ordered: Vec<ScopeConfig> = configs.to_vec();
    sort_descending(&mut ordered);

    LAYER_TYPES
        .iter()
        .map(|layer| {
            let contributing: Vec<&ScopeConfig> = ordered
                .iter()
                .filter(|c| c.has_fragment(*layer))
                .collect();
            LayerProvenance {
                layer: *layer,
                scopes: contributing.iter().map(|c| c.scope).collect(),
                sources: contributing.iter().map(|c| c.base_path.clone()).collect(),
            }
        })
        .collect()
}
