//! Tools layer - MCP servers, commands, scripts, and service endpoints
//!
//! Additive across scopes. The keyed collections (`mcp_servers`,
//! `commands`) merge by name with the higher-precedence entry winning.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An MCP server definition, keyed by `name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct McpServer {
    /// Unique name within the merged tool set
    pub name: String,

    /// Launch command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Launch arguments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// What this server provides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A project command definition, keyed by `name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CommandSpec {
    /// Unique name within the merged command set
    pub name: String,

    /// What the command does
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Invocation example
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

/// Tools content for one scope, and also the merged form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ToolsLayer {
    /// MCP servers, keyed by name
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mcp_servers: Vec<McpServer>,

    /// Project commands, keyed by name
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<CommandSpec>,

    /// External services in use
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,

    /// Script name to invocation
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scripts: BTreeMap<String, String>,

    /// API name to endpoint or doc link
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub apis: BTreeMap<String, String>,

    /// Free-form tool notes from the file body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

impl ToolsLayer {
    /// True when no field carries content
    pub fn is_empty(&self) -> bool {
        self.mcp_servers.is_empty()
            && self.commands.is_empty()
            && self.services.is_empty()
            && self.scripts.is_empty()
            && self.apis.is_empty()
            && !self
                .raw_content
                .as_deref()
                .is_some_and(|s| !s.trim().is_empty())
    }

    /// Look up an MCP server by name
    pub fn mcp_server(&self, name: &str) -> Option<&McpServer> {
        self.mcp_servers.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(ToolsLayer::default().is_empty());
    }

    #[test]
    fn test_server_lookup() {
        let layer = ToolsLayer {
            mcp_servers: vec![McpServer {
                name: "github".to_string(),
                command: Some("gh-mcp".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        assert!(!layer.is_empty());
        assert_eq!(
            layer.mcp_server("github").unwrap().command.as_deref(),
            Some("gh-mcp")
        );
        assert!(layer.mcp_server("gitlab").is_none());
    }

    #[test]
    fn test_frontmatter_shape_deserializes() {
        let yaml = r#"
mcp_servers:
  - name: github
    command: gh-mcp
    description: GitHub access
services:
  - postgres
scripts:
  test: cargo test
"#;
        let layer: ToolsLayer = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(layer.mcp_servers.len(), 1);
        assert_eq!(layer.services, vec!["postgres".to_string()]);
        assert_eq!(layer.scripts.get("test").unwrap(), "cargo test");
    }
}
