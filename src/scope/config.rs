//! Per-scope configuration record
//!
//! One scope's full set of layer fragments plus the path it was loaded
//! from. Built by the loader (or by hand in tests), immutable for the
//! duration of one resolution.

use serde::{Deserialize, Serialize};

use super::ScopeLevel;
use crate::layer::{
    GoalsFragment, KnowledgeLayer, LayerType, MethodsFragment, RulesLayer, ToolsLayer,
};

/// One scope's contribution to the hierarchy: 0-5 layer fragments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScopeConfig {
    /// Which scope level this configuration belongs to
    pub scope: ScopeLevel,

    /// Directory this configuration was loaded from
    pub base_path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<RulesLayer>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsLayer>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<MethodsFragment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge: Option<KnowledgeLayer>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<GoalsFragment>,
}

impl ScopeConfig {
    /// Create an empty configuration for a scope
    pub fn new(scope: ScopeLevel, base_path: impl Into<String>) -> Self {
        Self {
            scope,
            base_path: base_path.into(),
            rules: None,
            tools: None,
            methods: None,
            knowledge: None,
            goals: None,
        }
    }

    /// Whether a fragment was supplied for the layer, even if empty
    pub fn has_fragment(&self, layer: LayerType) -> bool {
        match layer {
            LayerType::Rules => self.rules.is_some(),
            LayerType::Tools => self.tools.is_some(),
            LayerType::Methods => self.methods.is_some(),
            LayerType::Knowledge => self.knowledge.is_some(),
            LayerType::Goals => self.goals.is_some(),
        }
    }

    /// Builder-style fragment setters, mainly for tests and fixtures
    pub fn with_rules(mut self, rules: RulesLayer) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn with_tools(mut self, tools: ToolsLayer) -> Self {
        self.tools = Some(tools);
        self
    }

    pub fn with_methods(mut self, methods: MethodsFragment) -> Self {
        self.methods = Some(methods);
        self
    }

    pub fn with_knowledge(mut self, knowledge: KnowledgeLayer) -> Self {
        self.knowledge = Some(knowledge);
        self
    }

    pub fn with_goals(mut self, goals: GoalsFragment) -> Self {
        self.goals = Some(goals);
        self
    }
}
