//! Knowledge layer - project context, history, and decision records
//!
//! Additive across scopes. Free-text fields concatenate; ADRs merge by
//! number and the merged list is sorted ascending.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An architecture decision record, keyed by `number`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Adr {
    /// ADR number, unique within the merged set
    pub number: u32,

    /// Short title
    pub title: String,

    /// Current status (proposed, accepted, superseded, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Knowledge content for one scope, and also the merged form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeLayer {
    /// What the project is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,

    /// How the project is structured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,

    /// How the project got here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,

    /// Domain rules the code must respect
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub business_rules: Vec<String>,

    /// Architecture decision records, keyed by number
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adrs: Vec<Adr>,

    /// Term to definition
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub glossary: BTreeMap<String, String>,

    /// Spec name to location or summary
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub specs: BTreeMap<String, String>,

    /// Free-form knowledge from the file body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

impl KnowledgeLayer {
    /// True when no field carries content
    pub fn is_empty(&self) -> bool {
        fn blank(text: &Option<String>) -> bool {
            !text.as_deref().is_some_and(|s| !s.trim().is_empty())
        }

        blank(&self.overview)
            && blank(&self.architecture)
            && blank(&self.history)
            && self.business_rules.is_empty()
            && self.adrs.is_empty()
            && self.glossary.is_empty()
            && self.specs.is_empty()
            && blank(&self.raw_content)
    }

    /// Look up an ADR by number
    pub fn adr(&self, number: u32) -> Option<&Adr> {
        self.adrs.iter().find(|a| a.number == number)
    }
}
