//! Turn rendering: events to HTML fragments (pure).
//!
//! Rendering is a pure function of the turn, so re-rendering the same turn
//! always produces identical HTML.

pub mod cards;
pub mod escape;
pub mod markdown;

pub use cards::CodeLanguage;
pub use escape::{escape_html, unescape_html};
pub use markdown::markdown_to_html;

use crate::model::{Event, ToolCall, ToolOutcome, Turn};
use crate::parser::is_truthy;
use cards::{TOOL_ERROR_TITLE, TOOL_RESULT_TITLE, TOOL_USE_TITLE};

/// Shown in the tool-use title when the record has no tool name. Browser
/// viewers of the same format print `undefined` here instead.
const UNKNOWN_TOOL_NAME: &str = "unknown";

/// Render every event of a turn, in order, skipping empty fragments.
pub fn render_turn(turn: &Turn) -> String {
    turn.events()
        .iter()
        .map(render_event)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Render a single event as one card, or an empty string when the event has
/// nothing to show.
pub fn render_event(event: &Event) -> String {
    match event {
        Event::User(message) if message.content().is_empty() => String::new(),
        Event::User(message) => cards::user_card(message.content()),
        Event::Assistant(message) => message.text().map(cards::assistant_card).unwrap_or_default(),
        Event::Thinking(block) => cards::collapsed_card(
            cards::THINKING_TITLE,
            block.text(),
            CodeLanguage::Plaintext,
            false,
        ),
        Event::ToolUse(Some(call)) => render_tool_use(call),
        Event::ToolResult(Some(outcome)) => render_tool_result(outcome),
        Event::ToolUse(None) | Event::ToolResult(None) | Event::Other(_) => String::new(),
    }
}

fn render_tool_use(call: &ToolCall) -> String {
    let title = format!("{TOOL_USE_TITLE}: {}", call.name().unwrap_or(UNKNOWN_TOOL_NAME));
    let body = call
        .input()
        .filter(|input| is_truthy(input))
        .and_then(|input| serde_json::to_string_pretty(input).ok())
        .unwrap_or_default();

    cards::collapsed_card(&title, &body, CodeLanguage::Json, false)
}

fn render_tool_result(outcome: &ToolOutcome) -> String {
    let title = if outcome.is_error() {
        TOOL_ERROR_TITLE
    } else {
        TOOL_RESULT_TITLE
    };

    cards::collapsed_card(title, outcome.content(), CodeLanguage::Bash, outcome.is_error())
}
