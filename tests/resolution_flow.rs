//! End-to-end resolution, diagnosis, and recommendation scenarios

use std::collections::BTreeMap;

use context_stack::conflict::{detect_conflicts, Severity};
use context_stack::layer::{
    GoalsFragment, McpServer, MethodsFragment, RulesLayer, ToolsLayer, Workflow,
};
use context_stack::recommend::{generate_recommendations, Level};
use context_stack::resolve::{resolve_config, ResolutionContext};
use context_stack::scope::{ScopeConfig, ScopeLevel};

fn scope_map(configs: &[ScopeConfig]) -> BTreeMap<ScopeLevel, ScopeConfig> {
    configs.iter().map(|c| (c.scope, c.clone())).collect()
}

#[test]
fn health_score_95_for_goal_without_criteria() {
    let system = ScopeConfig::new(ScopeLevel::System, "/etc/ctx").with_rules(RulesLayer {
        security: vec!["no secrets".to_string()],
        ..Default::default()
    });
    let project = ScopeConfig::new(ScopeLevel::Project, "/repo/.ctx")
        .with_rules(RulesLayer {
            forbidden: vec!["delete prod db".to_string()],
            ..Default::default()
        })
        .with_goals(GoalsFragment {
            current: Some("ship login".to_string()),
            ..Default::default()
        });

    let configs = vec![system, project];
    let merged = resolve_config(&configs);

    // Both rules survive the merge
    assert!(merged.rules.security.contains(&"no secrets".to_string()));
    assert!(merged
        .rules
        .forbidden
        .contains(&"delete prod db".to_string()));

    let scopes = scope_map(&configs);
    let conflicts = detect_conflicts(&merged, &scopes);

    assert!(conflicts.errors().is_empty());
    let warnings = conflicts.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("success criteria"));
    assert_eq!(conflicts.health_score, 95);

    let recommendations = generate_recommendations(&merged, &scopes, &conflicts);
    let criteria = recommendations
        .recommendations
        .iter()
        .find(|r| r.id == "add-success-criteria")
        .expect("missing add-success-criteria recommendation");
    assert_eq!(criteria.priority, Level::High);
    assert!(recommendations
        .quick_wins()
        .iter()
        .any(|r| r.id == "add-success-criteria"));
}

#[test]
fn current_goal_keeps_first_non_empty_value() {
    // System is lowest precedence yet its `current` wins; this is the
    // documented first-wins behavior for that single field.
    let system = ScopeConfig::new(ScopeLevel::System, "/etc/ctx").with_goals(GoalsFragment {
        current: Some("A".to_string()),
        success_criteria: vec!["done".to_string()],
        ..Default::default()
    });
    let project = ScopeConfig::new(ScopeLevel::Project, "/repo/.ctx").with_goals(GoalsFragment {
        current: Some("B".to_string()),
        ..Default::default()
    });

    let merged = resolve_config(&[system, project]);
    assert_eq!(merged.goals.current.as_deref(), Some("A"));
}

#[test]
fn override_truncates_methods_below_the_flag() {
    let system = ScopeConfig::new(ScopeLevel::System, "/etc/ctx").with_methods(MethodsFragment {
        workflows: vec![Workflow {
            name: "legacy".to_string(),
            ..Default::default()
        }],
        ..Default::default()
    });
    let user = ScopeConfig::new(ScopeLevel::User, "~/.ctx").with_methods(MethodsFragment {
        override_lower: true,
        workflows: vec![Workflow {
            name: "tdd".to_string(),
            ..Default::default()
        }],
        ..Default::default()
    });
    let project = ScopeConfig::new(ScopeLevel::Project, "/repo/.ctx").with_methods(
        MethodsFragment {
            workflows: vec![Workflow {
                name: "review".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        },
    );

    let merged = resolve_config(&[system, user, project]);
    assert!(merged.methods.workflow("legacy").is_none());
    assert!(merged.methods.workflow("tdd").is_some());
    assert!(merged.methods.workflow("review").is_some());
}

#[test]
fn keyed_fields_prefer_higher_precedence() {
    let system = ScopeConfig::new(ScopeLevel::System, "/etc/ctx").with_tools(ToolsLayer {
        mcp_servers: vec![McpServer {
            name: "github".to_string(),
            command: Some("system-launcher".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    });
    let project = ScopeConfig::new(ScopeLevel::Project, "/repo/.ctx").with_tools(ToolsLayer {
        mcp_servers: vec![McpServer {
            name: "github".to_string(),
            command: Some("project-launcher".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    });

    let configs = vec![system, project];
    let merged = resolve_config(&configs);
    assert_eq!(
        merged.tools.mcp_server("github").unwrap().command.as_deref(),
        Some("project-launcher")
    );

    // The duplicate definition is still surfaced as a warning
    let conflicts = detect_conflicts(&merged, &scope_map(&configs));
    assert!(conflicts
        .warnings()
        .iter()
        .any(|c| c.id.starts_with("tools-duplicate-server")));
}

#[test]
fn contradiction_is_an_error_and_sinks_the_score() {
    let project = ScopeConfig::new(ScopeLevel::Project, "/repo/.ctx").with_rules(RulesLayer {
        forbidden: vec!["x".to_string()],
        required: vec!["x".to_string()],
        ..Default::default()
    });

    let configs = vec![project];
    let merged = resolve_config(&configs);
    let conflicts = detect_conflicts(&merged, &scope_map(&configs));

    let errors = conflicts.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].id.contains("contradiction"));
    assert_eq!(errors[0].severity, Severity::Error);
    assert!(conflicts.health_score <= 85);
}

#[test]
fn resolution_context_carries_scopes_and_task_id() {
    let project = ScopeConfig::new(ScopeLevel::Project, "/repo/.ctx").with_goals(GoalsFragment {
        current: Some("ship login".to_string()),
        success_criteria: vec!["login works".to_string()],
        ..Default::default()
    });

    let ctx = ResolutionContext::build(None, Some(project), None, None).with_task_id("TASK-7");

    assert_eq!(ctx.scope_count(), 1);
    assert_eq!(ctx.task_id.as_deref(), Some("TASK-7"));
    assert_eq!(ctx.merged.goals.current.as_deref(), Some("ship login"));

    // The context's scope map feeds straight into diagnostics
    let conflicts = detect_conflicts(&ctx.merged, &ctx.scopes);
    assert!(!conflicts.has_errors());
    assert_eq!(conflicts.health_score, 100);
}
