//! Scope levels and precedence ordering

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::ScopeConfig;

/// A level in the configuration hierarchy.
///
/// Declared lowest precedence first so the derived ordering matches
/// `rank`; the explicit `rank` match is what guards exhaustiveness if
/// a level is ever added.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ScopeLevel {
    System,
    User,
    Project,
    Task,
}

/// All scope levels, highest precedence first.
pub const SCOPE_LEVELS: [ScopeLevel; 4] = [
    ScopeLevel::Task,
    ScopeLevel::Project,
    ScopeLevel::User,
    ScopeLevel::System,
];

impl ScopeLevel {
    /// Numeric precedence rank; higher outranks lower.
    pub fn rank(self) -> u8 {
        match self {
            ScopeLevel::System => 0,
            ScopeLevel::User => 1,
            ScopeLevel::Project => 2,
            ScopeLevel::Task => 3,
        }
    }

    /// Lowercase name used in messages and JSON output
    pub fn as_str(self) -> &'static str {
        match self {
            ScopeLevel::System => "system",
            ScopeLevel::User => "user",
            ScopeLevel::Project => "project",
            ScopeLevel::Task => "task",
        }
    }

    /// True if `self` has strictly higher precedence than `other`
    pub fn outranks(self, other: ScopeLevel) -> bool {
        self.rank() > other.rank()
    }
}

impl fmt::Display for ScopeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialOrd for ScopeLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScopeLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

/// Total comparator over scope levels (ascending precedence)
pub fn precedence_cmp(a: ScopeLevel, b: ScopeLevel) -> Ordering {
    a.rank().cmp(&b.rank())
}

/// Sort configs lowest precedence first
pub fn sort_ascending(configs: &mut [ScopeConfig]) {
    configs.sort_by(|a, b| precedence_cmp(a.scope, b.scope));
}

/// Sort configs highest precedence first
pub fn sort_descending(configs: &mut [ScopeConfig]) {
    configs.sort_by(|a, b| precedence_cmp(b.scope, a.scope));
}

/// Highest-precedence level in a set, if any
pub fn highest_precedence<I>(levels: I) -> Option<ScopeLevel>
where
    I: IntoIterator<Item = ScopeLevel>,
{
    levels.into_iter().max_by(|a, b| precedence_cmp(*a, *b))
}

/// Filter to configs at or above a minimum scope level
pub fn at_or_above(configs: &[ScopeConfig], min: ScopeLevel) -> Vec<&ScopeConfig> {
    configs
        .iter()
        .filter(|c| c.scope.rank() >= min.rank())
        .collect()
}
