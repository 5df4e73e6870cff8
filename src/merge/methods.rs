//! Methods merge - additive within the override-truncated suffix

use crate::layer::{MethodsFragment, MethodsLayer};

use super::{concat_text, dedup_concat, merge_keyed, merge_maps, override_suffix};

/// Merge methods fragments, lowest precedence first.
///
/// The last fragment that sets `override` discards everything below
/// it, including any `raw_content` accumulated so far; the remaining
/// suffix merges additively (workflows keyed by name, patterns
/// deduplicated, decisions/checklists per key).
pub fn merge_methods(fragments: &[&MethodsFragment]) -> MethodsLayer {
    let active = override_suffix(fragments, |f| f.override_lower);

    MethodsLayer {
        workflows: merge_keyed(active.iter().map(|f| f.workflows.as_slice()), |w| {
            w.name.clone()
        }),
        patterns: dedup_concat(active.iter().map(|f| f.patterns.as_slice())),
        decisions: merge_maps(active.iter().map(|f| &f.decisions)),
        checklists: merge_maps(active.iter().map(|f| &f.checklists)),
        raw_content: concat_text(active.iter().map(|f| f.raw_content.as_deref())),
    }
}
