//! Resolver
//!
//! Orchestrates the merge engine across all supplied per-scope
//! configurations, producing one merged configuration plus provenance
//! metadata.

mod context;
mod merged;
mod resolver;

pub use context::ResolutionContext;
pub use merged::{LayerView, MergeMetadata, MergedConfig};
pub use resolver::{layer_provenance, resolve_config, resolve_config_at, LayerProvenance};
