//! Static HTML page surface.
//!
//! [`HtmlPage`] holds the state of every stepper element in memory and
//! serializes it into a complete HTML document. The document comes from a page
//! shell: the built-in one, or a user template containing `{{stepper}}` where
//! the stepper markup goes (and optionally `{{title}}`).

use crate::render::escape_html;
use crate::state::Direction;
use crate::view::surface::{ElementId, Surface};

/// Placeholder replaced by the stepper markup.
pub const STEPPER_PLACEHOLDER: &str = "{{stepper}}";
/// Placeholder replaced by the escaped page title.
pub const TITLE_PLACEHOLDER: &str = "{{title}}";

const DEFAULT_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{title}}</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css">
  <style>
    html { scroll-behavior: smooth; }
    .transcript-stepper { max-width: 960px; margin: 0 auto; padding: 1rem; transition: opacity .2s; }
    .stepper-nav { display: flex; align-items: center; justify-content: space-between; gap: 1rem; margin-bottom: 1rem; }
    .chat-message { border: 1px solid #dee2e6; border-radius: .5rem; padding: 1rem; margin-bottom: 1rem; }
    .user-message { background-color: #f8f9fa; }
    .assistant-message { background-color: #fff; }
    .collapsed-message { margin-bottom: 1rem; }
    .collapsed-message summary { cursor: pointer; font-weight: 600; }
    .tool-result pre { max-height: 400px; overflow: auto; background-color: #f1f3f5; padding: .75rem; border-radius: .25rem; }
    .is-error summary { color: #dc3545; }
    .tool-result.is-error pre { border-left: 4px solid #dc3545; }
  </style>
</head>
<body>
  <h1 class="h4 text-center my-3">{{title}}</h1>
{{stepper}}
</body>
</html>
"#;

/// Title used when none is configured.
pub const DEFAULT_TITLE: &str = "Transcript";

/// Link targets for enabled controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLinks {
    /// Target of the previous control.
    pub previous: Option<String>,
    /// Target of the next control.
    pub next: Option<String>,
}

/// In-memory page document.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    shell: String,
    title: String,
    content_html: String,
    counter_text: String,
    loading_visible: bool,
    revealed: bool,
    previous_enabled: bool,
    next_enabled: bool,
    scroll_offset: Option<u32>,
    links: NavLinks,
}

impl HtmlPage {
    /// Page built from the default shell.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_shell(DEFAULT_SHELL, title)
    }

    /// Page built from a custom shell template.
    ///
    /// A shell without `{{stepper}}` has no container; mounting on it is a no-op.
    pub fn with_shell(shell: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            title: title.into(),
            content_html: String::new(),
            counter_text: String::new(),
            loading_visible: true,
            revealed: false,
            previous_enabled: false,
            next_enabled: false,
            scroll_offset: None,
            links: NavLinks::default(),
        }
    }

    /// Inner HTML of the content element.
    pub fn content_html(&self) -> &str {
        &self.content_html
    }

    /// Text of the counter element.
    pub fn counter_text(&self) -> &str {
        &self.counter_text
    }

    /// Whether the loading indicator is still shown.
    pub fn is_loading_visible(&self) -> bool {
        self.loading_visible
    }

    /// Whether the container has been made visible.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether the control stepping in `direction` is enabled.
    pub fn is_control_enabled(&self, direction: Direction) -> bool {
        match direction {
            Direction::Previous => self.previous_enabled,
            Direction::Next => self.next_enabled,
        }
    }

    /// Header offset of the last scroll request, if any.
    pub fn scroll_offset(&self) -> Option<u32> {
        self.scroll_offset
    }

    /// Set where enabled controls link to when serialized.
    pub fn set_links(&mut self, links: NavLinks) {
        self.links = links;
    }

    /// Serialize the whole document.
    pub fn to_html(&self) -> String {
        self.shell
            .replace(TITLE_PLACEHOLDER, &escape_html(&self.title))
            .replace(STEPPER_PLACEHOLDER, &self.stepper_markup())
    }

    fn stepper_markup(&self) -> String {
        let opacity = if self.revealed { 1 } else { 0 };
        let loading_hidden = if self.loading_visible { "" } else { " hidden" };
        let content_style = self
            .scroll_offset
            .map(|offset| format!(r#" style="scroll-margin-top: {offset}px;""#))
            .unwrap_or_default();

        format!(
            r#"<div id="{container}" class="transcript-stepper" style="opacity: {opacity};">
  <div class="stepper-nav">
    {previous}
    <span id="{counter}" class="step-counter">{counter_text}</span>
    {next}
  </div>
  <div id="{loading}" class="transcript-loading text-center text-muted"{loading_hidden}>Loading transcript...</div>
  <div id="{content}" class="transcript-content"{content_style}>{content_html}</div>
</div>"#,
            container = ElementId::Container.id(),
            previous = self.control_markup(Direction::Previous),
            counter = ElementId::Counter.id(),
            counter_text = escape_html(&self.counter_text),
            next = self.control_markup(Direction::Next),
            loading = ElementId::Loading.id(),
            content = ElementId::Content.id(),
            content_html = self.content_html,
        )
    }

    fn control_markup(&self, direction: Direction) -> String {
        let id = ElementId::control(direction).id();
        let label = match direction {
            Direction::Previous => "&larr; Previous",
            Direction::Next => "Next &rarr;",
        };
        let href = match direction {
            Direction::Previous => self.links.previous.as_deref(),
            Direction::Next => self.links.next.as_deref(),
        };

        match (self.is_control_enabled(direction), href) {
            (true, Some(href)) => format!(
                r#"<a id="{id}" class="btn btn-outline-primary" href="{}">{label}</a>"#,
                escape_html(href)
            ),
            (true, None) => {
                format!(r#"<button id="{id}" type="button" class="btn btn-outline-primary">{label}</button>"#)
            }
            (false, _) => format!(
                r#"<button id="{id}" type="button" class="btn btn-outline-primary" disabled>{label}</button>"#
            ),
        }
    }
}

impl Surface for HtmlPage {
    fn has_container(&self) -> bool {
        self.shell.contains(STEPPER_PLACEHOLDER)
    }

    fn set_content_html(&mut self, html: String) {
        self.content_html = html;
    }

    fn set_counter_text(&mut self, text: &str) {
        self.counter_text = text.to_string();
    }

    fn hide_loading(&mut self) {
        self.loading_visible = false;
    }

    fn reveal(&mut self) {
        self.revealed = true;
    }

    fn set_control_enabled(&mut self, direction: Direction, enabled: bool) {
        match direction {
            Direction::Previous => self.previous_enabled = enabled,
            Direction::Next => self.next_enabled = enabled,
        }
    }

    fn scroll_content_into_view(&mut self, header_offset: u32) {
        self.scroll_offset = Some(header_offset);
    }
}
