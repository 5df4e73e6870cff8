//! Recommendation generation
//!
//! Each check runs exactly once, so no recommendation is emitted twice
//! for the same underlying absence. The list order is check order.

use std::collections::BTreeMap;

use crate::conflict::ConflictReport;
use crate::layer::LayerType;
use crate::resolve::MergedConfig;
use crate::scope::{ScopeConfig, ScopeLevel};

use super::{Level, Recommendation, RecommendationReport};

/// Generate improvement suggestions from a merged configuration, the
/// scopes in use, and the conflict report for the same resolution.
pub fn generate_recommendations(
    merged: &MergedConfig,
    scopes: &BTreeMap<ScopeLevel, ScopeConfig>,
    conflicts: &ConflictReport,
) -> RecommendationReport {
    let mut recommendations = Vec::new();

    let error_count = conflicts.errors().len();
    if error_count > 0 {
        recommendations.push(Recommendation {
            id: "resolve-errors".to_string(),
            title: "Resolve configuration errors".to_string(),
            description: format!(
                "{} error-severity conflict(s) make the merged configuration contradictory",
                error_count
            ),
            action: "Fix each error-severity conflict reported by the detector".to_string(),
            benefit: Some("A configuration that can actually be followed".to_string()),
            priority: Level::High,
            impact: Level::High,
            effort: Level::Medium,
            layer: None,
        });
    }

    let warning_count = conflicts.warnings().len();
    if warning_count > 0 {
        recommendations.push(Recommendation {
            id: "address-warnings".to_string(),
            title: "Address configuration warnings".to_string(),
            description: format!(
                "{} warning(s) indicate gaps or likely mistakes",
                warning_count
            ),
            action: "Review each warning and resolve or accept it deliberately".to_string(),
            benefit: None,
            priority: Level::Medium,
            impact: Level::Medium,
            effort: Level::Low,
            layer: None,
        });
    }

    if merged.rules.security.is_empty() {
        recommendations.push(Recommendation {
            id: "add-security-rules".to_string(),
            title: "Add security rules".to_string(),
            description: "No security rules are defined at any scope".to_string(),
            action: "Add rules.security entries covering secrets, credentials, and data handling"
                .to_string(),
            benefit: Some("Baseline guardrails for every task".to_string()),
            priority: Level::High,
            impact: Level::High,
            effort: Level::Low,
            layer: Some(LayerType::Rules),
        });
    }

    if merged.tools.mcp_servers.is_empty() {
        recommendations.push(Recommendation {
            id: "add-mcp-servers".to_string(),
            title: "Configure MCP servers".to_string(),
            description: "No MCP servers are configured at any scope".to_string(),
            action: "Declare the MCP servers this project relies on under tools.mcp_servers"
                .to_string(),
            benefit: Some("Tooling becomes discoverable instead of tribal knowledge".to_string()),
            priority: Level::Medium,
            impact: Level::High,
            effort: Level::Medium,
            layer: Some(LayerType::Tools),
        });
    } else {
        let undescribed = merged
            .tools
            .mcp_servers
            .iter()
            .filter(|s| s.description.as_deref().map_or(true, |d| d.trim().is_empty()))
            .count();
        if undescribed > 0 {
            recommendations.push(Recommendation {
                id: "describe-mcp-servers".to_string(),
                title: "Describe MCP servers".to_string(),
                description: format!("{} MCP server(s) have no description", undescribed),
                action: "Add a one-line description to each server entry".to_string(),
                benefit: None,
                priority: Level::Low,
                impact: Level::Low,
                effort: Level::Low,
                layer: Some(LayerType::Tools),
            });
        }
    }

    if merged.methods.is_empty() {
        recommendations.push(Recommendation {
            id: "define-workflows".to_string(),
            title: "Define working methods".to_string(),
            description: "No workflows, patterns, or decisions are recorded".to_string(),
            action: "Capture the main workflows (review, release, incident) under methods"
                .to_string(),
            benefit: None,
            priority: Level::Medium,
            impact: Level::Medium,
            effort: Level::Medium,
            layer: Some(LayerType::Methods),
        });
    }

    if merged.knowledge.is_empty() {
        recommendations.push(Recommendation {
            id: "document-knowledge".to_string(),
            title: "Record project knowledge".to_string(),
            description: "No overview, architecture, or history is recorded".to_string(),
            action: "Write a short overview and the key architecture facts under knowledge"
                .to_string(),
            benefit: Some("New sessions start with context instead of rediscovery".to_string()),
            priority: Level::Medium,
            impact: Level::High,
            effort: Level::Medium,
            layer: Some(LayerType::Knowledge),
        });
    }

    match merged.goals.current_text() {
        None => {
            recommendations.push(Recommendation {
                id: "set-current-goal".to_string(),
                title: "Set a current goal".to_string(),
                description: "No current goal is set at any scope".to_string(),
                action: "Set goals.current to the objective in progress".to_string(),
                benefit: Some("Work aligns to a stated objective".to_string()),
                priority: Level::High,
                impact: Level::High,
                effort: Level::Low,
                layer: Some(LayerType::Goals),
            });
        }
        Some(_) if merged.goals.success_criteria.is_empty() => {
            recommendations.push(Recommendation {
                id: "add-success-criteria".to_string(),
                title: "Add success criteria".to_string(),
                description: "The current goal has no success criteria".to_string(),
                action: "List the observable conditions that mean the goal is done".to_string(),
                benefit: Some("Completion becomes verifiable".to_string()),
                priority: Level::High,
                impact: Level::High,
                effort: Level::Low,
                layer: Some(LayerType::Goals),
            });
        }
        Some(_) => {}
    }

    if merged.populated_layer_count() <= 2 {
        recommendations.push(Recommendation {
            id: "broaden-layer-coverage".to_string(),
            title: "Use more of the layer model".to_string(),
            description: format!(
                "Only {} of 5 layers carry any content",
                merged.populated_layer_count()
            ),
            action: "Fill in the unused layers where the project has something to say".to_string(),
            benefit: None,
            priority: Level::Medium,
            impact: Level::Medium,
            effort: Level::Medium,
            layer: None,
        });
    }

    if scopes.len() <= 1 {
        recommendations.push(Recommendation {
            id: "use-scope-hierarchy".to_string(),
            title: "Use the scope hierarchy".to_string(),
            description: format!("{} scope(s) contribute configuration", scopes.len()),
            action: "Move broadly-applicable content to user or system scope".to_string(),
            benefit: Some("Shared defaults stop being copy-pasted per project".to_string()),
            priority: Level::Medium,
            impact: Level::Medium,
            effort: Level::Low,
            layer: None,
        });
    }

    RecommendationReport { recommendations }
}
