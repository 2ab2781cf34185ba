//! HTML text escaping.

use std::borrow::Cow;

/// Escapes `&`, `<`, `>`, `"` and `'` as HTML entities.
///
/// Quotes use numeric entities (`&#34;`, `&#39;`). Every other character,
/// including control characters and non-ASCII text, is passed through.
/// Input that needs no escaping is returned borrowed.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    let Some(first) = s.find(needs_escape) else {
        return Cow::Borrowed(s);
    };

    let (clean, rest) = s.split_at(first);
    let mut out = String::with_capacity(s.len() + 8);
    out.push_str(clean);

    for c in rest.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }

    Cow::Owned(out)
}

fn needs_escape(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&#34;x&#34;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_borrows_clean_input() {
        assert!(matches!(escape_html("plain text"), Cow::Borrowed(_)));
        assert!(matches!(escape_html(""), Cow::Borrowed("")));
    }

    #[test]
    fn test_escape_keeps_prefix_before_first_special() {
        assert_eq!(escape_html("abc<"), "abc&lt;");
    }

    #[test]
    fn test_escape_passes_non_ascii_and_control_characters() {
        assert_eq!(escape_html("héllo\t\u{0}<ü>"), "héllo\t\u{0}&lt;ü&gt;");
    }

    #[test]
    fn test_escape_reescapes_existing_entities() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }
}
