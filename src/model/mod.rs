//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod event;
pub mod turn;

// Re-export for convenience
pub use error::{AppError, DecodeError, LoadError};
pub use event::{
    AssistantMessage, Event, Role, ThinkingBlock, ToolCall, ToolOutcome, UserMessage,
    THINKING_PLACEHOLDER,
};
pub use turn::{group_into_turns, Turn};
