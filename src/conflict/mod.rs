//! Conflict detector
//!
//! Inspects the merged configuration together with the original
//! per-scope inputs and emits a severity-tagged list of issues plus a
//! derived health score. "Errors" here are a severity classification
//! of configuration problems, not execution failures; detection never
//! fails.

mod detect;
mod types;

pub use detect::detect_conflicts;
pub use types::{health_score, Conflict, ConflictReport, Severity};

/// Lowercase, hyphenated identifier fragment derived from free text.
/// Used to keep conflict ids stable across runs.
pub(crate) fn slug(text: &str) -> String {
    let mut out = String::new();
    for ch in text.chars().take(40) {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::slug;

    #[test]
    fn test_slug_normalizes() {
        assert_eq!(slug("Delete Prod DB!"), "delete-prod-db");
        assert_eq!(slug("  spaces   collapse "), "spaces-collapse");
        assert_eq!(slug(""), "");
    }
}
