//! Minimal markdown to HTML conversion for static page copy.
//!
//! Handles `#`-`###` headers, `**bold**`, `*italic*`, `* ` and `N. ` list
//! lines, `[text](url)` links and line breaks. Input is not escaped and
//! nesting is not supported.

use std::sync::LazyLock;

use regex::Regex;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

fn rule(pattern: &str, replacement: &'static str) -> Rule {
    Rule {
        pattern: Regex::new(pattern).unwrap_or_else(|e| panic!("invalid markdown rule {pattern}: {e}")),
        replacement,
    }
}

// Order matters: headers before emphasis, emphasis before list markers,
// list coalescing before line breaks.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        rule(r"(?m)^### (.*)$", "<h3>$1</h3>"),
        rule(r"(?m)^## (.*)$", "<h2>$1</h2>"),
        rule(r"(?m)^# (.*)$", "<h1>$1</h1>"),
        rule(r"\*\*(.*?)\*\*", "<strong>$1</strong>"),
        rule(r"\*(.*?)\*", "<em>$1</em>"),
        rule(r"(?m)^[ \t]*\* (.*)$", "<ul><li>$1</li></ul>"),
        rule(r"(?m)^[ \t]*\d+\. (.*)$", "<ol><li>$1</li></ol>"),
        rule(r"\[([^\]]+)\]\(([^)]+)\)", r#"<a href="$2">$1</a>"#),
        rule(r"</ul>\s*<ul>", ""),
        rule(r"</ol>\s*<ol>", ""),
        rule(r"\r?\n", "<br />"),
    ]
});

pub fn to_html(markdown: &str) -> String {
    RULES.iter().fold(markdown.to_owned(), |html, rule| {
        rule.pattern.replace_all(&html, rule.replacement).into_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(to_html(""), "");
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(
            to_html("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn test_headers() {
        assert_eq!(
            to_html("# Title\n## Section\n### Detail"),
            "<h1>Title</h1><br /><h2>Section</h2><br /><h3>Detail</h3>"
        );
    }

    #[test]
    fn test_consecutive_list_items_share_container() {
        assert_eq!(
            to_html("* first\n* second"),
            "<ul><li>first</li><li>second</li></ul>"
        );
        assert_eq!(
            to_html("1. one\n2. two\n3. three"),
            "<ol><li>one</li><li>two</li><li>three</li></ol>"
        );
    }

    #[test]
    fn test_separate_list_kinds_stay_apart() {
        assert_eq!(
            to_html("* bullet\n1. number"),
            "<ul><li>bullet</li></ul><br /><ol><li>number</li></ol>"
        );
    }

    #[test]
    fn test_links_and_breaks() {
        assert_eq!(
            to_html("See [our site](https://riviera-stays.com)\nThanks"),
            r#"See <a href="https://riviera-stays.com">our site</a><br />Thanks"#
        );
    }

    #[test]
    fn test_markup_is_not_escaped() {
        assert_eq!(to_html("<b>raw</b>"), "<b>raw</b>");
    }
}
