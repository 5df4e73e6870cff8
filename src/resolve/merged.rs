//! Merged configuration with provenance metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::layer::{GoalsLayer, KnowledgeLayer, LayerType, MethodsLayer, RulesLayer, ToolsLayer};
use crate::scope::ScopeLevel;

/// Provenance recorded at merge time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MergeMetadata {
    /// When the merge ran
    pub merged_at: DateTime<Utc>,

    /// Scopes that contributed, highest precedence first
    pub scopes_included: Vec<ScopeLevel>,

    /// Per layer, the base paths of every config that supplied a
    /// fragment for it (present, not necessarily non-empty), highest
    /// precedence first
    pub layer_sources: BTreeMap<LayerType, Vec<String>>,
}

/// The combined result of one resolution. Never mutated after
/// construction; none of its layer types can carry an override flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MergedConfig {
    pub rules: RulesLayer,
    pub tools: ToolsLayer,
    pub methods: MethodsLayer,
    pub knowledge: KnowledgeLayer,
    pub goals: GoalsLayer,
    pub metadata: MergeMetadata,
}

/// Borrowed view of one merged layer, selected by [`LayerType`].
#[derive(Debug, Clone, Copy)]
pub enum LayerView<'a> {
    Rules(&'a RulesLayer),
    Tools(&'a ToolsLayer),
    Methods(&'a MethodsLayer),
    Knowledge(&'a KnowledgeLayer),
    Goals(&'a GoalsLayer),
}

impl MergedConfig {
    /// Extract one layer's merged fragment by type
    pub fn layer(&self, layer: LayerType) -> LayerView<'_> {
        match layer {
            LayerType::Rules => LayerView::Rules(&self.rules),
            LayerType::Tools => LayerView::Tools(&self.tools),
            LayerType::Methods => LayerView::Methods(&self.methods),
            LayerType::Knowledge => LayerView::Knowledge(&self.knowledge),
            LayerType::Goals => LayerView::Goals(&self.goals),
        }
    }

    /// Whether a layer's merged fragment has any non-empty field.
    /// Empty collections and blank strings count as absent.
    pub fn layer_has_content(&self, layer: LayerType) -> bool {
        match self.layer(layer) {
            LayerView::Rules(l) => !l.is_empty(),
            LayerView::Tools(l) => !l.is_empty(),
            LayerView::Methods(l) => !l.is_empty(),
            LayerView::Knowledge(l) => !l.is_empty(),
            LayerView::Goals(l) => !l.is_empty(),
        }
    }

    /// Count of layers carrying any content
    pub fn populated_layer_count(&self) -> usize {
        crate::layer::LAYER_TYPES
            .iter()
            .filter(|l| self.layer_has_content(**l))
            .count()
    }

    /// Serialize to pretty JSON for the CLI
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
