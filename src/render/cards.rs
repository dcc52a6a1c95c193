//! HTML card templates.
//!
//! Every dynamic value is escaped here (or by the markdown converter) before
//! it reaches the template.

use crate::render::escape::escape_html;
use crate::render::markdown::markdown_to_html;

/// Title of a thinking card.
pub const THINKING_TITLE: &str = "💭 Thinking...";
/// Title prefix of a tool-use card; the tool name follows.
pub const TOOL_USE_TITLE: &str = "🛠️ Tool Use";
/// Title of a successful tool-result card.
pub const TOOL_RESULT_TITLE: &str = "🧰 Tool Result";
/// Title of a failed tool-result card.
pub const TOOL_ERROR_TITLE: &str = "🧰 Tool Error";

/// Code language class of a collapsed card body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeLanguage {
    /// Tool output and thinking text
    Plaintext,
    /// Tool-use input
    Json,
    /// Shell snippets
    Bash,
}

impl CodeLanguage {
    /// Suffix of the `language-*` class.
    pub fn as_str(self) -> &'static str {
        match self {
            CodeLanguage::Plaintext => "plaintext",
            CodeLanguage::Json => "json",
            CodeLanguage::Bash => "bash",
        }
    }
}

/// Card echoing the user's text verbatim, whitespace preserved.
pub fn user_card(content: &str) -> String {
    format!(
        r#"
<div class="chat-message user-message">
  <div class="d-flex align-items-center mb-2">
    <i class="bi bi-person-fill me-2" style="font-size: 1.2rem;"></i>
    <strong class="fs-6">User</strong>
  </div>
  <pre style="white-space: pre-wrap; word-wrap: break-word; margin: 0; font-family: var(--font-monospace); font-size: 0.9rem;"><code>{}</code></pre>
</div>"#,
        escape_html(content)
    )
}

/// Card with the assistant's reply converted from the markdown subset.
pub fn assistant_card(text: &str) -> String {
    format!(
        r#"
<div class="chat-message assistant-message">
  <div class="d-flex align-items-center mb-2">
    <i class="bi bi-robot me-2" style="font-size: 1.2rem; color: #0d6efd;"></i>
    <strong class="fs-6" style="color: #0d6efd;">Assistant</strong>
  </div>
  <p style="white-space: pre-wrap; word-wrap: break-word; margin-bottom: 0;">{}</p>
</div>"#,
        markdown_to_html(text)
    )
}

/// Collapsible `<details>` card with a plain-text body.
///
/// Error cards carry the `is-error` class on both the wrapper and the body.
pub fn collapsed_card(
    title: &str,
    content: &str,
    language: CodeLanguage,
    is_error: bool,
) -> String {
    let error_class = if is_error { " is-error" } else { "" };
    format!(
        r#"
<div class="collapsed-message{error_class}">
  <details>
    <summary>{title}</summary>
    <div class="tool-result{error_class}">
      <pre><code class="language-{language}">{content}</code></pre>
    </div>
  </details>
</div>"#,
        title = escape_html(title),
        language = language.as_str(),
        content = escape_html(content),
    )
}

/// Error state shown in place of the turn content when loading fails.
pub fn load_error_card(message: &str) -> String {
    format!(
        r#"<div class="alert alert-danger"><strong>Error:</strong> Could not load transcript.<br><small>{}</small></div>"#,
        escape_html(message)
    )
}
