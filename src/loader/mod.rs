//! Scope directory loader
//!
//! Turns a directory of layer files into a [`ScopeConfig`]. Each scope
//! directory holds up to five markdown files (`rules.md`, `tools.md`,
//! `methods.md`, `knowledge.md`, `goals.md`); an optional YAML
//! frontmatter block supplies the structured fields and the body
//! becomes the fragment's `raw_content`. A missing file means the
//! scope said nothing about that layer.
//!
//! The loader is the fallible boundary of the system: unreadable files
//! and malformed frontmatter are load errors here, while the engine
//! downstream never fails.

mod frontmatter;
mod scope_dir;

pub use scope_dir::{layer_file_name, load_hierarchy, load_scope, HierarchyPaths, LoadError};
