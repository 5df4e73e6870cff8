//! Human-readable rendering of engine output for the CLI
//!
//! The engine itself produces plain data; everything presentation
//! lives here or in the `--json` path of the binary.

use crate::conflict::{ConflictReport, Severity};
use crate::layer::LAYER_TYPES;
use crate::recommend::{Level, RecommendationReport};
use crate::resolve::MergedConfig;

/// Render the merged configuration as a short per-layer summary.
pub fn render_merged(merged: &MergedConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Merged configuration ({} scope(s): {})\n",
        merged.metadata.scopes_included.len(),
        merged
            .metadata
            .scopes_included
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    ));

    for layer in LAYER_TYPES {
        let sources = merged
            .metadata
            .layer_sources
            .get(&layer)
            .map(Vec::len)
            .unwrap_or(0);
        let state = if merged.layer_has_content(layer) {
            "populated"
        } else {
            "empty"
        };
        out.push_str(&format!(
            "  {:<10} {} ({} source(s))\n",
            layer.as_str(),
            state,
            sources
        ));
    }

    if let Some(current) = merged.goals.current_text() {
        out.push_str(&format!("Current goal: {}\n", current));
    }

    out
}

/// Render the conflict report grouped by severity, worst first.
pub fn render_conflicts(report: &ConflictReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Health score: {}/100\n", report.health_score));

    let groups = [
        ("errors", Severity::Error),
        ("warnings", Severity::Warning),
        ("notes", Severity::Info),
    ];
    for (label, severity) in groups {
        let conflicts = report.by_severity(severity);
        if conflicts.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{} ({}):\n", label, conflicts.len()));
        for conflict in conflicts {
            out.push_str(&format!("  [{}] {}\n", conflict.id, conflict.message));
            if let Some(suggestion) = &conflict.suggestion {
                out.push_str(&format!("      -> {}\n", suggestion));
            }
        }
    }

    if report.conflicts.is_empty() {
        out.push_str("No conflicts detected.\n");
    }

    out
}

/// Render recommendations grouped by priority, with quick wins called
/// out at the end.
pub fn render_recommendations(report: &RecommendationReport) -> String {
    let mut out = String::new();

    if report.recommendations.is_empty() {
        out.push_str("Nothing to recommend.\n");
        return out;
    }

    let groups = [
        ("high priority", Level::High),
        ("medium priority", Level::Medium),
        ("low priority", Level::Low),
    ];
    for (label, priority) in groups {
        let recs = report.by_priority(priority);
        if recs.is_empty() {
            continue;
        }
        out.push_str(&format!("{} ({}):\n", label, recs.len()));
        for rec in recs {
            out.push_str(&format!("  {} - {}\n", rec.title, rec.action));
        }
        out.push('\n');
    }

    let wins = report.quick_wins();
    if !wins.is_empty() {
        out.push_str("Quick wins:\n");
        for rec in wins {
            out.push_str(&format!("  {}\n", rec.title));
        }
    }

    out
}
