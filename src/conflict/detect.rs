//! The detection battery
//!
//! A fixed set of independent checks, each producing zero or more
//! conflicts. The canonical list is in check order; every check runs
//! exactly once per detection.

use std::collections::{BTreeMap, HashSet};

use crate::layer::LayerType;
use crate::resolve::MergedConfig;
use crate::scope::{ScopeConfig, ScopeLevel};

use super::{slug, Conflict, ConflictReport, Severity};

/// Run the full battery against a merged configuration and the
/// per-scope inputs it came from.
pub fn detect_conflicts(
    merged: &MergedConfig,
    scopes: &BTreeMap<ScopeLevel, ScopeConfig>,
) -> ConflictReport {
    let mut checks = Checks::default();

    check_rules(merged, scopes, &mut checks);
    check_tools(merged, scopes, &mut checks);
    check_methods(merged, scopes, &mut checks);
    check_knowledge(merged, scopes, &mut checks);
    check_goals(merged, scopes, &mut checks);
    check_cross_layer(merged, scopes, &mut checks);

    ConflictReport::from_conflicts(checks.conflicts)
}

/// Accumulator that keeps ids unique within one run.
#[derive(Default)]
struct Checks {
    conflicts: Vec<Conflict>,
    ids: HashSet<String>,
}

impl Checks {
    fn push(&mut self, mut conflict: Conflict) {
        if !self.ids.insert(conflict.id.clone()) {
            let mut n = 2;
            loop {
                let candidate = format!("{}-{}", conflict.id, n);
                if self.ids.insert(candidate.clone()) {
                    conflict.id = candidate;
                    break;
                }
                n += 1;
            }
        }
        self.conflicts.push(conflict);
    }
}

/// Whether any scope supplied a fragment for the layer, even an empty
/// one. Emptiness checks only apply to supplied layers; a layer no
/// scope mentioned is a gap for the recommendation engine, not a
/// conflict.
fn supplied(scopes: &BTreeMap<ScopeLevel, ScopeConfig>, layer: LayerType) -> bool {
    scopes.values().any(|c| c.has_fragment(layer))
}

/// Values appearing in more than one scope, first-seen order, with the
/// implicated scopes listed highest precedence first. Repeats within a
/// single scope do not count.
fn multi_scope_values<'a, I>(per_scope: I) -> Vec<(String, Vec<ScopeLevel>)>
where
    I: IntoIterator<Item = (ScopeLevel, Vec<&'a str>)>,
{
    let mut seen: Vec<(String, Vec<ScopeLevel>)> = Vec::new();
    for (scope, values) in per_scope {
        let mut in_this_scope: HashSet<&str> = HashSet::new();
        for value in values {
            if !in_this_scope.insert(value) {
                continue;
            }
            match seen.iter_mut().find(|(v, _)| v == value) {
                Some((_, scopes)) => scopes.push(scope),
                None => seen.push((value.to_string(), vec![scope])),
            }
        }
    }

    seen.retain(|(_, scopes)| scopes.len() > 1);
    for (_, scopes) in &mut seen {
        scopes.sort_by(|a, b| b.rank().cmp(&a.rank()));
    }
    seen
}

fn scope_list(scopes: &[ScopeLevel]) -> String {
    scopes
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn check_rules(
    merged: &MergedConfig,
    scopes: &BTreeMap<ScopeLevel, ScopeConfig>,
    checks: &mut Checks,
) {
    let per_scope = scopes.iter().filter_map(|(level, config)| {
        config
            .rules
            .as_ref()
            .map(|r| (*level, r.security.iter().map(String::as_str).collect()))
    });
    for (value, implicated) in multi_scope_values(per_scope) {
        checks.push(Conflict {
            id: format!("rules-duplicate-security-{}", slug(&value)),
            layer: LayerType::Rules,
            severity: Severity::Warning,
            message: format!("Security rule \"{}\" is defined in more than one scope", value),
            details: Some(format!("Defined in scopes: {}", scope_list(&implicated))),
            suggestion: Some("Keep the rule at the broadest scope and drop the copies".to_string()),
            scopes: implicated,
        });
    }

    for value in &merged.rules.forbidden {
        if merged.rules.required.contains(value) {
            checks.push(Conflict {
                id: format!("rules-contradiction-{}", slug(value)),
                layer: LayerType::Rules,
                severity: Severity::Error,
                message: format!("\"{}\" is both forbidden and required after merge", value),
                details: None,
                suggestion: Some(
                    "Remove the item from one of the two lists; the merged rules are unsatisfiable"
                        .to_string(),
                ),
                scopes: vec![],
            });
        }
    }

    if supplied(scopes, LayerType::Rules) && merged.rules.is_empty() {
        checks.push(Conflict {
            id: "rules-empty".to_string(),
            layer: LayerType::Rules,
            severity: Severity::Info,
            message: "No rules are defined at any scope".to_string(),
            details: None,
            suggestion: None,
            scopes: vec![],
        });
    }
}

fn check_tools(
    merged: &MergedConfig,
    scopes: &BTreeMap<ScopeLevel, ScopeConfig>,
    checks: &mut Checks,
) {
    let per_scope = scopes.iter().filter_map(|(level, config)| {
        config.tools.as_ref().map(|t| {
            (
                *level,
                t.mcp_servers.iter().map(|s| s.name.as_str()).collect(),
            )
        })
    });
    for (name, implicated) in multi_scope_values(per_scope) {
        checks.push(Conflict {
            id: format!("tools-duplicate-server-{}", slug(&name)),
            layer: LayerType::Tools,
            severity: Severity::Warning,
            message: format!(
                "MCP server \"{}\" is defined in scopes: {}",
                name,
                scope_list(&implicated)
            ),
            details: Some("The highest-precedence definition wins".to_string()),
            suggestion: None,
            scopes: implicated,
        });
    }

    if supplied(scopes, LayerType::Tools) && merged.tools.is_empty() {
        checks.push(Conflict {
            id: "tools-empty".to_string(),
            layer: LayerType::Tools,
            severity: Severity::Info,
            message: "No tools are defined at any scope".to_string(),
            details: None,
            suggestion: None,
            scopes: vec![],
        });
    }
}

fn check_methods(
    merged: &MergedConfig,
    scopes: &BTreeMap<ScopeLevel, ScopeConfig>,
    checks: &mut Checks,
) {
    let per_scope = scopes.iter().filter_map(|(level, config)| {
        config.methods.as_ref().map(|m| {
            (
                *level,
                m.workflows.iter().map(|w| w.name.as_str()).collect(),
            )
        })
    });
    for (name, implicated) in multi_scope_values(per_scope) {
        checks.push(Conflict {
            id: format!("methods-duplicate-workflow-{}", slug(&name)),
            layer: LayerType::Methods,
            severity: Severity::Info,
            message: format!("Workflow \"{}\" is defined in more than one scope", name),
            details: Some(format!("Defined in scopes: {}", scope_list(&implicated))),
            suggestion: Some("This may be an intentional override".to_string()),
            scopes: implicated,
        });
    }

    if !merged.methods.patterns.is_empty() && merged.methods.workflows.is_empty() {
        checks.push(Conflict {
            id: "methods-patterns-without-workflows".to_string(),
            layer: LayerType::Methods,
            severity: Severity::Info,
            message: "Patterns are defined but no workflows exist to apply them".to_string(),
            details: None,
            suggestion: Some("Define workflows that exercise the documented patterns".to_string()),
            scopes: vec![],
        });
    }

    if supplied(scopes, LayerType::Methods) && merged.methods.is_empty() {
        checks.push(Conflict {
            id: "methods-empty".to_string(),
            layer: LayerType::Methods,
            severity: Severity::Info,
            message: "No methods are defined at any scope".to_string(),
            details: None,
            suggestion: None,
            scopes: vec![],
        });
    }
}

fn check_knowledge(
    merged: &MergedConfig,
    scopes: &BTreeMap<ScopeLevel, ScopeConfig>,
    checks: &mut Checks,
) {
    let mut with_architecture: Vec<ScopeLevel> = scopes
        .iter()
        .filter(|(_, config)| {
            config
                .knowledge
                .as_ref()
                .and_then(|k| k.architecture.as_deref())
                .is_some_and(|a| !a.trim().is_empty())
        })
        .map(|(level, _)| *level)
        .collect();

    if with_architecture.len() > 1 {
        with_architecture.sort_by(|a, b| b.rank().cmp(&a.rank()));
        checks.push(Conflict {
            id: "knowledge-architecture-multiple".to_string(),
            layer: LayerType::Knowledge,
            severity: Severity::Info,
            message: format!(
                "Architecture is described in scopes: {}; the texts will be concatenated",
                scope_list(&with_architecture)
            ),
            details: None,
            suggestion: Some("Verify the descriptions are consistent".to_string()),
            scopes: with_architecture,
        });
    }

    if supplied(scopes, LayerType::Knowledge) && merged.knowledge.is_empty() {
        checks.push(Conflict {
            id: "knowledge-empty".to_string(),
            layer: LayerType::Knowledge,
            severity: Severity::Warning,
            message: "No knowledge is recorded at any scope".to_string(),
            details: None,
            suggestion: Some("Record an overview and the key architecture facts".to_string()),
            scopes: vec![],
        });
    }
}

fn check_goals(
    merged: &MergedConfig,
    scopes: &BTreeMap<ScopeLevel, ScopeConfig>,
    checks: &mut Checks,
) {
    let mut with_current: Vec<ScopeLevel> = scopes
        .iter()
        .filter(|(_, config)| {
            config
                .goals
                .as_ref()
                .and_then(|g| g.current.as_deref())
                .is_some_and(|c| !c.trim().is_empty())
        })
        .map(|(level, _)| *level)
        .collect();

    if with_current.len() > 1 {
        with_current.sort_by(|a, b| b.rank().cmp(&a.rank()));
        checks.push(Conflict {
            id: "goals-current-multiple".to_string(),
            layer: LayerType::Goals,
            severity: Severity::Info,
            message: format!(
                "A current goal is set in scopes: {}",
                scope_list(&with_current)
            ),
            details: Some("The first non-empty value in merge order is kept".to_string()),
            suggestion: None,
            scopes: with_current,
        });
    }

    match merged.goals.current_text() {
        None if supplied(scopes, LayerType::Goals) => {
            checks.push(Conflict {
                id: "goals-current-missing".to_string(),
                layer: LayerType::Goals,
                severity: Severity::Warning,
                message: "No current goal is set".to_string(),
                details: None,
                suggestion: Some("Set goals.current so work has a stated objective".to_string()),
                scopes: vec![],
            });
        }
        Some(_) if merged.goals.success_criteria.is_empty() => {
            checks.push(Conflict {
                id: "goals-no-success-criteria".to_string(),
                layer: LayerType::Goals,
                severity: Severity::Warning,
                message: "Current goals have no success criteria".to_string(),
                details: None,
                suggestion: Some(
                    "Add success criteria so completion is verifiable".to_string(),
                ),
                scopes: vec![],
            });
        }
        _ => {}
    }
}

/// Cross-layer integrity checks. These are best-effort heuristics
/// built on case-insensitive substring matching against free text, so
/// both false positives and false negatives are possible; keep them
/// isolated here so they can be skipped independently of the
/// structural checks above.
fn check_cross_layer(
    merged: &MergedConfig,
    scopes: &BTreeMap<ScopeLevel, ScopeConfig>,
    checks: &mut Checks,
) {
    let current = match merged.goals.current_text() {
        Some(text) => text.to_lowercase(),
        None => return,
    };

    // Server names configured anywhere in the inputs, first-seen order
    let mut configured: Vec<&str> = Vec::new();
    for config in scopes.values() {
        if let Some(tools) = &config.tools {
            for server in &tools.mcp_servers {
                if !configured.contains(&server.name.as_str()) {
                    configured.push(&server.name);
                }
            }
        }
    }

    for name in configured {
        if current.contains(&name.to_lowercase()) && merged.tools.mcp_server(name).is_none() {
            checks.push(Conflict {
                id: format!("cross-goal-missing-server-{}", slug(name)),
                layer: LayerType::Goals,
                severity: Severity::Warning,
                message: format!(
                    "The current goal mentions MCP server \"{}\" which is absent from the merged tool set",
                    name
                ),
                details: Some("Substring match against the goal text; verify manually".to_string()),
                suggestion: None,
                scopes: vec![],
            });
        }
    }

    for workflow in &merged.methods.workflows {
        if current.contains(&workflow.name.to_lowercase()) {
            checks.push(Conflict {
                id: format!("cross-goal-workflow-{}", slug(&workflow.name)),
                layer: LayerType::Goals,
                severity: Severity::Info,
                message: format!(
                    "The current goal references workflow \"{}\", which is defined",
                    workflow.name
                ),
                details: None,
                suggestion: None,
                scopes: vec![],
            });
        }
    }
}
