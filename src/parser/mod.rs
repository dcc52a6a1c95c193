//! NDJSON parser for transcript events.
//!
//! This module provides pure parsing functions for converting transcript
//! lines into [`Event`] values. Decoding is best-effort: a line that fails to
//! decode is reported as a [`DecodeError`] and dropped by [`parse_transcript`],
//! never aborting the whole transcript.

use crate::model::{
    AssistantMessage, DecodeError, Event, Role, ThinkingBlock, ToolCall, ToolOutcome, UserMessage,
    THINKING_PLACEHOLDER,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

// Record type string constants
const TYPE_THINKING: &str = "thinking";
const TYPE_TOOL_USE: &str = "tool_use";
const TYPE_TOOL_RESULT: &str = "tool_result";

// Content part type constants
const PART_TEXT: &str = "text";

/// Raw JSON structure of one transcript line.
///
/// Every field is optional: records without a useful payload are filtered
/// after decoding, not rejected by serde.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "type", default)]
    record_type: Option<String>,
    #[serde(default)]
    message: Option<RawMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawMessage {
    Body(RawMessageBody),
    Other(Value),
}

impl RawMessage {
    /// Whether the `message` field counts as present.
    ///
    /// Empty strings, `false` and `0` count as absent.
    fn is_present(&self) -> bool {
        match self {
            RawMessage::Body(_) => true,
            RawMessage::Other(value) => is_truthy(value),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawMessageBody {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    content: Option<RawContent>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawContent {
    Text(String),
    Parts(Vec<RawPart>),
    Other(Value),
}

#[derive(Debug, Deserialize)]
struct RawPart {
    #[serde(rename = "type", default)]
    part_type: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thinking: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    input: Option<Value>,
    #[serde(default)]
    content: Option<Value>,
    #[serde(default)]
    is_error: Option<bool>,
}

/// Leading byte order mark, dropped before the text is trimmed.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Counts collected while parsing a transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines after trimming and splitting the transcript text.
    pub lines: usize,
    /// Lines that failed to decode.
    pub malformed: usize,
    /// Decoded records with no useful payload.
    pub irrelevant: usize,
    /// Events retained for grouping.
    pub kept: usize,
}

/// Events decoded from a transcript, plus parse statistics.
#[derive(Debug, Clone, Default)]
pub struct ParsedTranscript {
    /// Decoded events in transcript order.
    pub events: Vec<Event>,
    /// Line counts by outcome.
    pub report: LoadReport,
}

/// Parse a whole transcript text.
///
/// A leading byte order mark is dropped, then the text is trimmed once and
/// split on `\n`. Each line is decoded independently; malformed lines and
/// irrelevant records are dropped.
pub fn parse_transcript(text: &str) -> ParsedTranscript {
    let mut parsed = ParsedTranscript::default();

    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

    for (index, line) in text.trim().split('\n').enumerate() {
        parsed.report.lines += 1;
        match decode_line(line, index + 1) {
            Ok(Some(event)) => {
                parsed.report.kept += 1;
                parsed.events.push(event);
            }
            Ok(None) => {
                parsed.report.irrelevant += 1;
            }
            Err(err) => {
                debug!(line = err.line(), error = %err, "Dropping malformed transcript line");
                parsed.report.malformed += 1;
            }
        }
    }

    parsed
}

/// Decode a single transcript line.
///
/// Returns `Ok(None)` for a well-formed record that carries no useful payload:
/// a record is kept only if it has a `message`, or its `type` is one of
/// `thinking`, `tool_use` or `tool_result`.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidJson`] when the line is not a JSON record.
pub fn decode_line(raw: &str, line_number: usize) -> Result<Option<Event>, DecodeError> {
    let record: RawRecord = serde_json::from_str(raw).map_err(|e| DecodeError::InvalidJson {
        line: line_number,
        message: e.to_string(),
    })?;

    Ok(classify(record))
}

/// Turn a raw record into an event, or `None` if it is irrelevant.
fn classify(record: RawRecord) -> Option<Event> {
    let record_type = record.record_type.as_deref();
    let has_tool_type = matches!(
        record_type,
        Some(TYPE_THINKING | TYPE_TOOL_USE | TYPE_TOOL_RESULT)
    );
    let has_message = record.message.as_ref().is_some_and(RawMessage::is_present);

    if !has_message && !has_tool_type {
        return None;
    }

    let body = match record.message {
        Some(RawMessage::Body(body)) => Some(body),
        _ => None,
    };
    let role = body.as_ref().and_then(|b| b.role.as_deref()).map(Role::parse);
    let content = body.and_then(|b| b.content);

    let event = match (role, record_type) {
        (Some(Role::User), _) => Event::User(UserMessage::new(user_text(content))),
        (Some(Role::Assistant), _) => {
            Event::Assistant(AssistantMessage::new(first_text_part(content)))
        }
        (_, Some(TYPE_THINKING)) => Event::Thinking(ThinkingBlock::new(thinking_text(content))),
        (_, Some(TYPE_TOOL_USE)) => Event::ToolUse(first_part(content).map(tool_call)),
        (_, Some(TYPE_TOOL_RESULT)) => Event::ToolResult(first_part(content).map(tool_outcome)),
        (role, _) => Event::Other(role),
    };

    Some(event)
}

/// Text of a user message.
///
/// String content is used verbatim. For part arrays, each part contributes its
/// `text` (or its string `content`, as in tool-result parts), joined by newlines.
fn user_text(content: Option<RawContent>) -> String {
    match content {
        Some(RawContent::Text(text)) => text,
        Some(RawContent::Parts(parts)) => parts
            .into_iter()
            .filter_map(|part| match (part.text, part.content) {
                (Some(text), _) => Some(text),
                (None, Some(Value::String(content))) => Some(content),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Some(RawContent::Other(value)) => value_text(value),
        None => String::new(),
    }
}

/// First `text` part of an assistant message; a plain string counts as one.
fn first_text_part(content: Option<RawContent>) -> Option<String> {
    match content? {
        RawContent::Text(text) => Some(text),
        RawContent::Parts(parts) => parts
            .into_iter()
            .find(|part| part.part_type.as_deref() == Some(PART_TEXT))
            .map(|part| part.text.unwrap_or_default()),
        RawContent::Other(_) => None,
    }
}

/// Thinking text: first part's `thinking`, else string content, else placeholder.
fn thinking_text(content: Option<RawContent>) -> String {
    match content {
        Some(RawContent::Text(text)) => text,
        Some(RawContent::Parts(parts)) => parts
            .into_iter()
            .next()
            .and_then(|part| part.thinking)
            .filter(|thinking| !thinking.is_empty())
            .unwrap_or_else(|| THINKING_PLACEHOLDER.to_string()),
        _ => THINKING_PLACEHOLDER.to_string(),
    }
}

fn first_part(content: Option<RawContent>) -> Option<RawPart> {
    match content? {
        RawContent::Parts(parts) => parts.into_iter().next(),
        RawContent::Text(_) | RawContent::Other(_) => None,
    }
}

fn tool_call(part: RawPart) -> ToolCall {
    ToolCall::new(part.name, part.input)
}

fn tool_outcome(part: RawPart) -> ToolOutcome {
    let content = match part.content {
        Some(Value::Array(items)) => {
            let texts: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get(PART_TEXT).and_then(Value::as_str))
                .collect();
            if texts.is_empty() {
                Value::Array(items).to_string()
            } else {
                texts.join("\n")
            }
        }
        Some(value) => value_text(value),
        None => String::new(),
    };

    ToolOutcome::new(content, part.is_error.unwrap_or(false))
}

/// Plain text of an arbitrary JSON value: strings unquoted, null empty,
/// everything else as compact JSON.
fn value_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// JavaScript-style truthiness of a JSON value.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
