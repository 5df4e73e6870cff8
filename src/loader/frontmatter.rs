//! YAML frontmatter extraction
//!
//! A frontmatter block is fenced by `---` lines at the very start of
//! the file. Anything else is body text.

/// Split a file into its frontmatter (without the fences) and body.
/// Returns `(None, text)` when no valid frontmatter block opens the
/// file.
pub(crate) fn split_frontmatter(text: &str) -> (Option<&str>, &str) {
    let rest = match text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))
    {
        Some(rest) => rest,
        None => return (None, text),
    };

    let mut search = 0;
    while let Some(idx) = rest[search..].find("\n---") {
        let fence = search + idx;
        let after = &rest[fence + 4..];
        // The closing fence must be a whole line
        if after.is_empty() || after.starts_with('\n') || after.starts_with("\r\n") {
            let body = after
                .strip_prefix("\r\n")
                .or_else(|| after.strip_prefix("\n"))
                .unwrap_or(after);
            return (Some(&rest[..fence]), body);
        }
        search = fence + 4;
    }

    // Unterminated fence; treat the whole file as body
    (None, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_frontmatter() {
        let (front, body) = split_frontmatter("just some notes\n");
        assert!(front.is_none());
        assert_eq!(body, "just some notes\n");
    }

    #[test]
    fn test_frontmatter_and_body() {
        let text = "---\ncurrent: ship login\n---\n\nFree-form notes.\n";
        let (front, body) = split_frontmatter(text);
        assert_eq!(front, Some("current: ship login"));
        assert_eq!(body.trim(), "Free-form notes.");
    }

    #[test]
    fn test_frontmatter_only() {
        let text = "---\ncurrent: ship login\n---";
        let (front, body) = split_frontmatter(text);
        assert_eq!(front, Some("current: ship login"));
        assert_eq!(body, "");
    }

    #[test]
    fn test_unterminated_fence_is_body() {
        let text = "---\ncurrent: ship login\n";
        let (front, body) = split_frontmatter(text);
        assert!(front.is_none());
        assert_eq!(body, text);
    }

    #[test]
    fn test_crlf_fences() {
        let text = "---\r\ncurrent: ship login\r\n---\r\nNotes.\r\n";
        let (front, body) = split_frontmatter(text);
        assert_eq!(front.map(str::trim_end), Some("current: ship login"));
        assert_eq!(body, "Notes.\r\n");
    }

    #[test]
    fn test_dashes_inside_body_not_a_fence() {
        let text = "---\nkey: value\n----rule\n---\nbody\n";
        let (front, body) = split_frontmatter(text);
        assert_eq!(front, Some("key: value\n----rule"));
        assert_eq!(body, "body\n");
    }
}
