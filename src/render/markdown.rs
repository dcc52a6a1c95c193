//! Markdown-subset to HTML conversion for assistant replies.
//!
//! Not a Markdown parser: a fixed, ordered list of substitutions over the
//! escaped text. Later rules consume the output of earlier ones (list wrapping
//! runs after bullet conversion, paragraph breaks after line breaks), so the
//! order below is load-bearing.
//!
//! Known quirk kept as-is: newline rules also run inside fenced code blocks,
//! so code containing blank lines renders with `<br>` / paragraph breaks.

use crate::render::escape::escape_html;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Fenced block with an optional, known language tag.
static FENCED_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```((?:javascript|js|python|html|css|json|bash|sh)?)(\n?)([\s\S]*?)```")
        .expect("fenced code regex is valid")
});

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold regex is valid"));

static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("italic regex is valid"));

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("inline code regex is valid"));

/// Bullet line; the leading newline is consumed.
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\n- (.*))").expect("bullet regex is valid"));

/// Greedy, dot-all: one list spanning the first `<li>` to the last `</li>`.
static LIST_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(<li>.*</li>)").expect("list span regex is valid"));

const CODE_BLOCK_OPEN: &str =
    r#"<pre class="bg-dark text-white p-3 rounded" style="font-family: var(--font-monospace);">"#;
const INLINE_CODE_HTML: &str = r#"<code style="background-color: #e9ecef; padding: .2em .4em; border-radius: .25rem;">${1}</code>"#;
const LIST_HTML: &str = r#"<ul style="padding-left: 1.2rem; margin-top: 0.5rem; margin-bottom: 0.5rem;">${1}</ul>"#;

/// Language class used for fences without a tag.
const DEFAULT_FENCE_LANGUAGE: &str = "plaintext";

/// Convert assistant text to HTML.
///
/// The text is escaped first, so no markup from the transcript survives.
/// The result is meant to sit inside a `<p>` element: fenced blocks close and
/// reopen the paragraph around their `<pre>`.
pub fn markdown_to_html(text: &str) -> String {
    let escaped = escape_html(text);

    let html = FENCED_CODE.replace_all(&escaped, |caps: &Captures| {
        let language = match caps.get(1).map_or("", |m| m.as_str()) {
            "" => DEFAULT_FENCE_LANGUAGE,
            lang => lang,
        };
        let code = caps.get(3).map_or("", |m| m.as_str());
        format!(r#"</p>{CODE_BLOCK_OPEN}<code class="language-{language}">{code}</code></pre><p>"#)
    });
    let html = BOLD.replace_all(&html, "<strong>${1}</strong>");
    let html = ITALIC.replace_all(&html, "<em>${1}</em>");
    let html = INLINE_CODE.replace_all(&html, INLINE_CODE_HTML);
    let html = BULLET.replace_all(&html, "<li>${2}</li>");
    let html = LIST_SPAN.replace_all(&html, LIST_HTML);

    html.replace("</ul>\n", "</ul>")
        .replace('\n', "<br>")
        .replace("<br><br>", "</p><p>")
        .replace("</ul><br>", "</ul>")
}
