//! Rules layer - constraints the assistant must honor
//!
//! Additive across scopes: every scope's rules apply simultaneously.

use serde::{Deserialize, Serialize};

/// Rules content for one scope, and also the merged form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RulesLayer {
    /// Security constraints (e.g., "never commit secrets")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<String>,

    /// Requirements on produced output
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output_requirements: Vec<String>,

    /// Actions that must never be taken
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forbidden: Vec<String>,

    /// Actions that must always be taken
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Compliance obligations (licenses, policies)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compliance: Vec<String>,

    /// Free-form rule text from the file body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

impl RulesLayer {
    /// True when no field carries content (blank text counts as absent)
    pub fn is_empty(&self) -> bool {
        self.security.is_empty()
            && self.output_requirements.is_empty()
            && self.forbidden.is_empty()
            && self.required.is_empty()
            && self.compliance.is_empty()
            && !self
                .raw_content
                .as_deref()
                .is_some_and(|s| !s.trim().is_empty())
    }
}
