//! Transcript event types.
//!
//! An [`Event`] is one decoded transcript line. The event kind is decided once,
//! at decode time, so grouping and rendering can match exhaustively instead of
//! checking optional fields.

// ===== Role =====

/// Author of a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// Message typed by the user
    User,
    /// Message produced by the assistant
    Assistant,
    /// Any other role string found in the transcript (e.g. "system")
    Other(String),
}

impl Role {
    /// Map a raw role string onto a `Role`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            other => Role::Other(other.to_string()),
        }
    }
}

// ===== Event =====

/// One decoded transcript line.
///
/// Classification precedence: a user-role message is always [`Event::User`], an
/// assistant-role message is always [`Event::Assistant`]; only then does the
/// record `type` select `Thinking`, `ToolUse` or `ToolResult`.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// User chat message; always opens a new turn
    User(UserMessage),
    /// Assistant chat message
    Assistant(AssistantMessage),
    /// Extended reasoning block
    Thinking(ThinkingBlock),
    /// Tool invocation; `None` when the record carried no content part
    ToolUse(Option<ToolCall>),
    /// Tool output; `None` when the record carried no content part
    ToolResult(Option<ToolOutcome>),
    /// Record with a message that fits none of the above (e.g. a system role)
    Other(Option<Role>),
}

impl Event {
    /// Whether this event opens a new turn.
    pub fn is_user(&self) -> bool {
        matches!(self, Event::User(_))
    }

    /// Whether this event is absorbed by an open turn.
    ///
    /// `Other` events are neither user events nor members of a turn; the grouper
    /// skips them without closing the turn.
    pub fn joins_turn(&self) -> bool {
        matches!(
            self,
            Event::Assistant(_) | Event::Thinking(_) | Event::ToolUse(_) | Event::ToolResult(_)
        )
    }

    /// Message role, when the record carried one.
    pub fn role(&self) -> Option<Role> {
        match self {
            Event::User(_) => Some(Role::User),
            Event::Assistant(_) => Some(Role::Assistant),
            Event::Other(role) => role.clone(),
            Event::Thinking(_) | Event::ToolUse(_) | Event::ToolResult(_) => None,
        }
    }

    /// Short kind label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::User(_) => "user",
            Event::Assistant(_) => "assistant",
            Event::Thinking(_) => "thinking",
            Event::ToolUse(_) => "tool_use",
            Event::ToolResult(_) => "tool_result",
            Event::Other(_) => "other",
        }
    }
}

/// Content of a user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    content: String,
}

impl UserMessage {
    /// User message with the given text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Raw text, echoed verbatim by the renderer.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Assistant message reduced to the part the viewer shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantMessage {
    text: Option<String>,
}

impl AssistantMessage {
    /// Assistant message; `None` when no text part was present.
    pub fn new(text: Option<String>) -> Self {
        Self { text }
    }

    /// First `text` content part, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Placeholder shown when a thinking record has no readable text.
pub const THINKING_PLACEHOLDER: &str = "Thinking...";

/// Extended reasoning shown in a collapsed card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThinkingBlock {
    text: String,
}

impl ThinkingBlock {
    /// Thinking block with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Reasoning text, or [`THINKING_PLACEHOLDER`].
    pub fn text(&self) -> &str {
        &self.text
    }
}

// ===== Tools =====

/// Tool invocation taken from the first content part of a `tool_use` record.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCall {
    name: Option<String>,
    input: Option<serde_json::Value>,
}

impl ToolCall {
    /// Tool call from an optional name and input.
    pub fn new(name: Option<String>, input: Option<serde_json::Value>) -> Self {
        Self { name, input }
    }

    /// Tool name as recorded (Read, Bash, ...).
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Tool arguments as JSON.
    pub fn input(&self) -> Option<&serde_json::Value> {
        self.input.as_ref()
    }
}

/// Tool output taken from the first content part of a `tool_result` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutcome {
    content: String,
    is_error: bool,
}

impl ToolOutcome {
    /// Tool output with its error flag.
    pub fn new(content: impl Into<String>, is_error: bool) -> Self {
        Self {
            content: content.into(),
            is_error,
        }
    }

    /// Output text, already flattened to a string.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the tool reported a failure.
    pub fn is_error(&self) -> bool {
        self.is_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_maps_known_roles() {
        assert_eq!(Role::parse("user"), Role::User);
        assert_eq!(Role::parse("assistant"), Role::Assistant);
        assert_eq!(Role::parse("system"), Role::Other("system".to_string()));
    }

    #[test]
    fn only_user_events_open_turns() {
        assert!(Event::User(UserMessage::new("hi")).is_user());
        assert!(!Event::Assistant(AssistantMessage::new(None)).is_user());
        assert!(!Event::Other(Some(Role::User)).is_user());
    }

    #[test]
    fn joins_turn_accepts_assistant_and_tool_events() {
        assert!(Event::Assistant(AssistantMessage::new(None)).joins_turn());
        assert!(Event::Thinking(ThinkingBlock::new("x")).joins_turn());
        assert!(Event::ToolUse(None).joins_turn());
        assert!(Event::ToolResult(None).joins_turn());
        assert!(!Event::User(UserMessage::new("hi")).joins_turn());
        assert!(!Event::Other(Some(Role::Other("system".to_string()))).joins_turn());
    }

    #[test]
    fn role_reports_message_role() {
        assert_eq!(Event::User(UserMessage::new("a")).role(), Some(Role::User));
        assert_eq!(Event::Thinking(ThinkingBlock::new("a")).role(), None);
        assert_eq!(
            Event::Other(Some(Role::Other("system".to_string()))).role(),
            Some(Role::Other("system".to_string()))
        );
    }
}
