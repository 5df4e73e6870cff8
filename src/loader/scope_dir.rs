//! Loading one scope directory into a [`ScopeConfig`]

use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::layer::LayerType;
use crate::scope::{ScopeConfig, ScopeLevel};

use super::frontmatter::split_frontmatter;

/// Errors that can occur while loading a scope directory
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid frontmatter in {path}: {source}")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// The file a layer is loaded from within a scope directory
pub fn layer_file_name(layer: LayerType) -> &'static str {
    match layer {
        LayerType::Rules => "rules.md",
        LayerType::Tools => "tools.md",
        LayerType::Methods => "methods.md",
        LayerType::Knowledge => "knowledge.md",
        LayerType::Goals => "goals.md",
    }
}

/// Parse one layer file: frontmatter into the fragment's structured
/// fields, body into `raw_content`. Returns `Ok(None)` when the file
/// does not exist.
fn parse_layer_file<T>(path: &Path) -> Result<Option<(T, Option<String>)>, LoadError>
where
    T: DeserializeOwned + Default,
{
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let (front, body) = split_frontmatter(&text);

    let fragment = match front {
        Some(yaml) => serde_yaml::from_str(yaml).map_err(|e| LoadError::Frontmatter {
            path: path.to_path_buf(),
            source: e,
        })?,
        None => T::default(),
    };

    let body = body.trim();
    let raw_content = (!body.is_empty()).then(|| body.to_string());

    Ok(Some((fragment, raw_content)))
}

/// Load one scope directory. Missing layer files are simply absent
/// fragments; unreadable files and malformed frontmatter are errors.
pub fn load_scope(dir: &Path, level: ScopeLevel) -> Result<ScopeConfig, LoadError> {
    let mut config = ScopeConfig::new(level, dir.to_string_lossy());

    if let Some((mut rules, body)) =
        parse_layer_file::<crate::layer::RulesLayer>(&dir.join(layer_file_name(LayerType::Rules)))?
    {
        if body.is_some() {
            rules.raw_content = body;
        }
        config.rules = Some(rules);
    }

    if let Some((mut tools, body)) =
        parse_layer_file::<crate::layer::ToolsLayer>(&dir.join(layer_file_name(LayerType::Tools)))?
    {
        if body.is_some() {
            tools.raw_content = body;
        }
        config.tools = Some(tools);
    }

    if let Some((mut methods, body)) = parse_layer_file::<crate::layer::MethodsFragment>(
        &dir.join(layer_file_name(LayerType::Methods)),
    )? {
        if body.is_some() {
            methods.raw_content = body;
        }
        config.methods = Some(methods);
    }

    if let Some((mut knowledge, body)) = parse_layer_file::<crate::layer::KnowledgeLayer>(
        &dir.join(layer_file_name(LayerType::Knowledge)),
    )? {
        if body.is_some() {
            knowledge.raw_content = body;
        }
        config.knowledge = Some(knowledge);
    }

    if let Some((mut goals, body)) =
        parse_layer_file::<crate::layer::GoalsFragment>(&dir.join(layer_file_name(LayerType::Goals)))?
    {
        if body.is_some() {
            goals.raw_content = body;
        }
        config.goals = Some(goals);
    }

    Ok(config)
}

/// Scope directories to assemble into a hierarchy. Absent slots and
/// non-existent directories are skipped.
#[derive(Debug, Clone, Default)]
pub struct HierarchyPaths {
    pub task: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub user: Option<PathBuf>,
    pub system: Option<PathBuf>,
}

/// Load every present scope directory into a config list suitable for
/// the resolver.
pub fn load_hierarchy(paths: &HierarchyPaths) -> Result<Vec<ScopeConfig>, LoadError> {
    let slots = [
        (ScopeLevel::Task, &paths.task),
        (ScopeLevel::Project, &paths.project),
        (ScopeLevel::User, &paths.user),
        (ScopeLevel::System, &paths.system),
    ];

    let mut configs = Vec::new();
    for (level, slot) in slots {
        if let Some(dir) = slot {
            if dir.is_dir() {
                configs.push(load_scope(dir, level)?);
            }
        }
    }
    Ok(configs)
}
