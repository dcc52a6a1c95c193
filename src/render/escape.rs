//! HTML escaping for untrusted transcript text.

/// Escape `& < > " '` so text can be placed inside element content or
/// attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Reverse [`escape_html`].
///
/// Only the five entities produced by `escape_html` are decoded; `&amp;` last
/// so `&amp;lt;` round-trips to `&lt;`.
pub fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_five_characters() {
        insta::assert_snapshot!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            @"&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn leaves_plain_text_untouched() {
        assert_eq!(escape_html("hello\n  world"), "hello\n  world");
    }

    #[test]
    fn unescape_reverses_escape() {
        let raw = r#"if a < b && c > "d" { 'e' } &lt;"#;
        assert_eq!(unescape_html(&escape_html(raw)), raw);
    }
}
