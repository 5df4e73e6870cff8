//! Recommendation value objects

use serde::{Deserialize, Serialize};

use crate::layer::LayerType;

/// Three-step scale used for priority, impact, and effort alike.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Medium,
    Low,
}

/// One improvement suggestion. Immutable value object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Identifier, unique within one generation run
    pub id: String,

    pub title: String,

    pub description: String,

    /// Concrete next step
    pub action: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefit: Option<String>,

    pub priority: Level,
    pub impact: Level,
    pub effort: Level,

    /// The layer the suggestion concerns, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<LayerType>,
}

impl Recommendation {
    /// High impact at low effort
    pub fn is_quick_win(&self) -> bool {
        self.impact == Level::High && self.effort == Level::Low
    }
}

/// Generation output. The canonical list is in check order; priority
/// partitions and the quick-win subset are derived views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationReport {
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationReport {
    /// Recommendations at one priority, in canonical order
    pub fn by_priority(&self, priority: Level) -> Vec<&Recommendation> {
        self.recommendations
            .iter()
            .filter(|r| r.priority == priority)
            .collect()
    }

    /// Every recommendation with impact high and effort low
    pub fn quick_wins(&self) -> Vec<&Recommendation> {
        self.recommendations
            .iter()
            .filter(|r| r.is_quick_win())
            .collect()
    }

    /// Serialize to pretty JSON for the CLI
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
