//! XML entity escaping.

use std::borrow::Cow;

/// Characters that require escaping in XML text.
const ESCAPE_CHARS: [char; 5] = ['&', '<', '>', '"', '\''];

#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&apos;"),
        _ => None,
    }
}

/// Escape the five XML special characters in text content.
///
/// Single pass, so inserted entities are never re-escaped. Text already
/// containing entity references gets escaped again (`&amp;` becomes
/// `&amp;amp;`); this is a one-shot transform, not an idempotent one.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_borrows() {
        assert!(matches!(escape("hello world"), Cow::Borrowed(_)));
        assert_eq!(escape("hello world"), "hello world");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape("it's"), "it&apos;s");
    }

    #[test]
    fn test_escape_all_five() {
        assert_eq!(escape(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&apos;");
    }

    #[test]
    fn test_escape_mixed() {
        assert_eq!(
            escape("<a href=\"#\">link & text</a>"),
            "&lt;a href=&quot;#&quot;&gt;link &amp; text&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_not_idempotent_on_entities() {
        assert_eq!(escape("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_leaves_no_raw_specials() {
        let escaped = escape("a<b>&c\"d'e");
        let stripped = escaped
            .replace("&amp;", "")
            .replace("&lt;", "")
            .replace("&gt;", "")
            .replace("&quot;", "")
            .replace("&apos;", "");
        assert!(!stripped.contains(ESCAPE_CHARS));
    }
}
