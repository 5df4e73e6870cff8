//! Merge engine
//!
//! Five pure functions, one per layer, each combining an ordered list
//! of per-scope fragments into one merged fragment. Callers pass
//! fragments lowest precedence FIRST; every last-writer-wins rule in
//! this module therefore means "highest precedence wins".
//!
//! Strategy rules shared across layers:
//! - String lists: concatenate then deduplicate by value. Surviving
//!   order is first-occurrence order today, but that is a weak
//!   guarantee, not a contract.
//! - Free text: concatenate present values joined by a blank-line
//!   divider.
//! - Keyed collections: last writer wins per key, key-insertion order
//!   preserved.
//! - Maps: shallow merge, last writer wins per key.
//!
//! Methods and Goals additionally honor the `override` flag: the last
//! (highest-precedence) fragment that sets it truncates everything
//! below, and the additive rules apply to the remaining suffix only.

mod goals;
mod knowledge;
mod methods;
mod rules;
mod tools;

pub use goals::merge_goals;
pub use knowledge::merge_knowledge;
pub use methods::merge_methods;
pub use rules::merge_rules;
pub use tools::merge_tools;

use std::collections::BTreeMap;

/// Divider inserted between concatenated free-text blocks.
pub const TEXT_DIVIDER: &str = "\n\n---\n\n";

/// Concatenate string lists in input order, dropping exact duplicates.
pub(crate) fn dedup_concat<'a, I>(lists: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut merged: Vec<String> = Vec::new();
    for list in lists {
        for item in list {
            if !merged.contains(item) {
                merged.push(item.clone());
            }
        }
    }
    merged
}

/// Concatenate present, non-blank text blocks with [`TEXT_DIVIDER`].
pub(crate) fn concat_text<'a, I>(parts: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let present: Vec<&str> = parts
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect();

    if present.is_empty() {
        None
    } else {
        Some(present.join(TEXT_DIVIDER))
    }
}

/// Shallow-merge maps in input order; later keys overwrite earlier ones.
pub(crate) fn merge_maps<'a, I>(maps: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = &'a BTreeMap<String, String>>,
{
    let mut merged = BTreeMap::new();
    for map in maps {
        for (key, value) in map {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Merge keyed collections: later entries overwrite earlier entries
/// with the same key, in place, so the final order follows the first
/// appearance of each key.
pub(crate) fn merge_keyed<'a, T, K, I, F>(collections: I, key: F) -> Vec<T>
where
    T: Clone + 'a,
    K: PartialEq,
    I: IntoIterator<Item = &'a [T]>,
    F: Fn(&T) -> K,
{
    let mut merged: Vec<T> = Vec::new();
    for collection in collections {
        for item in collection {
            match merged.iter().position(|m| key(m) == key(item)) {
                Some(pos) => merged[pos] = item.clone(),
                None => merged.push(item.clone()),
            }
        }
    }
    merged
}

/// For override-strategy layers: the suffix starting at the last
/// (highest-precedence) fragment that sets the override flag, or the
/// whole list if none does.
pub(crate) fn override_suffix<'a, T, F>(fragments: &'a [&'a T], overrides: F) -> &'a [&'a T]
where
    F: Fn(&T) -> bool,
{
    match fragments.iter().rposition(|f| overrides(f)) {
        Some(pos) => &fragments[pos..],
        None => fragments,
    }
}
