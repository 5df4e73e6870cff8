//! Layer model
//!
//! Five fixed content categories, each permanently bound to one of two
//! merge strategies. Rules, Tools, and Knowledge accumulate across
//! scopes; Methods and Goals can be truncated by an override flag set
//! at a higher-precedence scope.
//!
//! Methods and Goals have distinct input (`*Fragment`) and merged
//! (`*Layer`) types. The `override` flag lives only on the fragment
//! types, so a merged configuration cannot carry one.

mod goals;
mod knowledge;
mod methods;
mod rules;
mod tools;

pub use goals::{GoalsFragment, GoalsLayer};
pub use knowledge::{Adr, KnowledgeLayer};
pub use methods::{MethodsFragment, MethodsLayer, Workflow};
pub use rules::RulesLayer;
pub use tools::{CommandSpec, McpServer, ToolsLayer};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five fixed content categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    Rules,
    Tools,
    Methods,
    Knowledge,
    Goals,
}

/// All layer types in canonical order.
pub const LAYER_TYPES: [LayerType; 5] = [
    LayerType::Rules,
    LayerType::Tools,
    LayerType::Methods,
    LayerType::Knowledge,
    LayerType::Goals,
];

/// How a layer combines contributions from multiple scopes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Combine contributions from all scopes; only exact duplicates drop
    Additive,
    /// A scope that opts in via the override flag replaces everything below it
    Override,
}

impl LayerType {
    /// The merge strategy is fixed per layer at compile time.
    pub fn strategy(self) -> MergeStrategy {
        match self {
            LayerType::Rules => MergeStrategy::Additive,
            LayerType::Tools => MergeStrategy::Additive,
            LayerType::Methods => MergeStrategy::Override,
            LayerType::Knowledge => MergeStrategy::Additive,
            LayerType::Goals => MergeStrategy::Override,
        }
    }

    /// Lowercase name used in messages, identifiers, and file names
    pub fn as_str(self) -> &'static str {
        match self {
            LayerType::Rules => "rules",
            LayerType::Tools => "tools",
            LayerType::Methods => "methods",
            LayerType::Knowledge => "knowledge",
            LayerType::Goals => "goals",
        }
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_binding() {
        assert_eq!(LayerType::Rules.strategy(), MergeStrategy::Additive);
        assert_eq!(LayerType::Tools.strategy(), MergeStrategy::Additive);
        assert_eq!(LayerType::Knowledge.strategy(), MergeStrategy::Additive);
        assert_eq!(LayerType::Methods.strategy(), MergeStrategy::Override);
        assert_eq!(LayerType::Goals.strategy(), MergeStrategy::Override);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&LayerType::Knowledge).unwrap(),
            "\"knowledge\""
        );
        let parsed: LayerType = serde_json::from_str("\"goals\"").unwrap();
        assert_eq!(parsed, LayerType::Goals);
    }
}
