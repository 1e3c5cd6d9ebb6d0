//! Text-matching helpers for list filters and keyword search.

/// PostgreSQL text search configuration used for poem content.
///
/// `simple` applies no stemming or stop words, so it behaves the same for
/// classical Chinese and Latin-script input.
pub const TEXT_SEARCH_CONFIG: &str = "simple";

/// Escape `\`, `%` and `_` so user input matches literally inside a LIKE
/// pattern (PostgreSQL's default escape character is `\`).
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build a `%...%` pattern matching `input` anywhere in a column.
pub fn contains_pattern(input: &str) -> String {
    format!("%{}%", escape_like(input))
}

/// Trim a user-supplied keyword or filter value, dropping it if blank.
pub fn non_blank(input: Option<&str>) -> Option<String> {
    input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_leaves_plain_text_alone() {
        assert_eq!(escape_like("李白"), "李白");
    }

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
    }

    #[test]
    fn escape_like_escapes_backslash_first() {
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }

    #[test]
    fn contains_pattern_wraps_in_percent() {
        assert_eq!(contains_pattern("明月"), "%明月%");
    }

    #[test]
    fn non_blank_trims_and_drops_empty() {
        assert_eq!(non_blank(Some("  唐 ")), Some("唐".to_string()));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }
}
