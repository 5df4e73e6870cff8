//! context-stack - layered context configuration, resolved and diagnosed
//!
//! This crate resolves partial configuration fragments scattered across
//! four filesystem scopes (task > project > user > system) into one
//! authoritative configuration, then diagnoses the result for internal
//! contradictions and gaps.
//!
//! Data flows one direction: per-scope fragments -> resolver -> merged
//! configuration -> conflict detector -> recommendation engine. The
//! engine is pure and synchronous over immutable in-memory inputs; the
//! loader is the only fallible boundary.

pub mod conflict;
pub mod layer;
pub mod loader;
pub mod merge;
pub mod recommend;
pub mod report;
pub mod resolve;
pub mod scope;

pub use conflict::{detect_conflicts, Conflict, ConflictReport, Severity};
pub use layer::{LayerType, MergeStrategy};
pub use loader::{load_hierarchy, load_scope, HierarchyPaths, LoadError};
pub use recommend::{generate_recommendations, Level, Recommendation, RecommendationReport};
pub use resolve::{resolve_config, MergedConfig, ResolutionContext};
pub use scope::{ScopeConfig, ScopeLevel};
