//! Tools merge - additive with keyed overwrite for servers and commands

use crate::layer::ToolsLayer;

use super::{concat_text, dedup_concat, merge_keyed, merge_maps};

/// Merge tools fragments, lowest precedence first.
///
/// `mcp_servers` and `commands` merge by name with the later (higher
/// precedence) definition winning; `services` deduplicates; `scripts`
/// and `apis` shallow-merge per key.
pub fn merge_tools(fragments: &[&ToolsLayer]) -> ToolsLayer {
    ToolsLayer {
        mcp_servers: merge_keyed(
            fragments.iter().map(|f| f.mcp_servers.as_slice()),
            |s| s.name.clone(),
        ),
        commands: merge_keyed(fragments.iter().map(|f| f.commands.as_slice()), |c| {
            c.name.clone()
        }),
        services: dedup_concat(fragments.iter().map(|f| f.services.as_slice())),
        scripts: merge_maps(fragments.iter().map(|f| &f.scripts)),
        apis: merge_maps(fragments.iter().map(|f| &f.apis)),
        raw_content: concat_text(fragments.iter().map(|f| f.raw_content.as_deref())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::McpServer;

    fn server(name: &str, command: &str) -> McpServer {
        McpServer {
            name: name.to_string(),
            command: Some(command.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input_yields_empty_fragment() {
        assert!(merge_tools(&[]).is_empty());
    }

    #[test]
    fn test_higher_precedence_server_wins() {
        let system = ToolsLayer {
            mcp_servers: vec![server("github", "old-command")],
            ..Default::default()
        };
        let project = ToolsLayer {
            mcp_servers: vec![server("github", "new-command")],
            ..Default::default()
        };

        // Lowest precedence first: system, then project
        let merged = merge_tools(&[&system, &project]);
        assert_eq!(merged.mcp_servers.len(), 1);
        assert_eq!(
            merged.mcp_server("github").unwrap().command.as_deref(),
            Some("new-command")
        );
    }

    #[test]
    fn test_key_insertion_order_preserved() {
        let a = ToolsLayer {
            mcp_servers: vec![server("alpha", "a"), server("beta", "b")],
            ..Default::default()
        };
        let b = ToolsLayer {
            mcp_servers: vec![server("alpha", "a2"), server("gamma", "g")],
            ..Default::default()
        };

        let merged = merge_tools(&[&a, &b]);
        let names: Vec<&str> = merged.mcp_servers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_scripts_last_writer_wins() {
        let mut a = ToolsLayer::default();
        a.scripts.insert("test".to_string(), "make test".to_string());
        a.scripts.insert("lint".to_string(), "make lint".to_string());
        let mut b = ToolsLayer::default();
        b.scripts.insert("test".to_string(), "cargo test".to_string());

        let merged = merge_tools(&[&a, &b]);
        assert_eq!(merged.scripts.get("test").unwrap(), "cargo test");
        assert_eq!(merged.scripts.get("lint").unwrap(), "make lint");
    }

    #[test]
    fn test_services_deduplicate() {
        let a = ToolsLayer {
            services: vec!["postgres".to_string()],
            ..Default::default()
        };
        let b = ToolsLayer {
            services: vec!["postgres".to_string(), "redis".to_string()],
            ..Default::default()
        };

        let merged = merge_tools(&[&a, &b]);
        assert_eq!(merged.services.len(), 2);
    }
}
