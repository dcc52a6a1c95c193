//! Conversational turns and the grouper that builds them.

use crate::model::Event;

/// One user event plus the events that answered it.
///
/// Invariants (enforced by [`group_into_turns`], the only constructor):
/// - non-empty
/// - the first event is a user event
/// - no later event is a user event
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    events: Vec<Event>,
}

impl Turn {
    /// Events in transcript order, user event first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The user event that opened this turn.
    pub fn leading(&self) -> &Event {
        // Non-empty by construction.
        &self.events[0]
    }

    /// Number of events, user event included.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Partition decoded events into turns.
///
/// Single left-to-right scan:
/// - events before the first user event are orphans and are discarded
/// - a user event closes the open turn (if any) and opens a new one
/// - assistant, thinking, tool_use and tool_result events join the open turn
/// - anything else is skipped without closing or extending the turn
///
/// Output order follows input order; nothing is sorted or deduplicated.
pub fn group_into_turns(events: impl IntoIterator<Item = Event>) -> Vec<Turn> {
    let mut turns: Vec<Turn> = Vec::new();
    let mut open: Option<Vec<Event>> = None;

    for event in events {
        if event.is_user() {
            if let Some(events) = open.take() {
                turns.push(Turn { events });
            }
            open = Some(vec![event]);
            continue;
        }

        if let Some(current) = open.as_mut() {
            if event.joins_turn() {
                current.push(event);
            }
        }
    }

    if let Some(events) = open {
        turns.push(Turn { events });
    }

    turns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AssistantMessage, Role, ThinkingBlock, ToolOutcome, UserMessage};

    fn user(text: &str) -> Event {
        Event::User(UserMessage::new(text))
    }

    fn assistant(text: &str) -> Event {
        Event::Assistant(AssistantMessage::new(Some(text.to_string())))
    }

    #[test]
    fn empty_input_gives_no_turns() {
        assert!(group_into_turns(Vec::new()).is_empty());
    }

    #[test]
    fn orphans_before_first_user_are_dropped() {
        let turns = group_into_turns(vec![
            assistant("early"),
            Event::ToolUse(None),
            user("hi"),
            assistant("hello"),
        ]);

        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].events(), &[user("hi"), assistant("hello")]);
    }

    #[test]
    fn each_user_event_opens_a_turn() {
        let turns = group_into_turns(vec![user("a"), user("b"), assistant("x"), user("c")]);

        let sizes: Vec<usize> = turns.iter().map(Turn::len).collect();
        assert_eq!(sizes, vec![1, 2, 1]);
        assert_eq!(turns[1].leading(), &user("b"));
    }

    #[test]
    fn tool_and_thinking_events_join_the_open_turn() {
        let turns = group_into_turns(vec![
            user("run it"),
            Event::Thinking(ThinkingBlock::new("hmm")),
            Event::ToolUse(None),
            Event::ToolResult(Some(ToolOutcome::new("ok", false))),
            assistant("done"),
        ]);

        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].len(), 5);
    }

    #[test]
    fn other_events_are_skipped_without_closing_the_turn() {
        let turns = group_into_turns(vec![
            user("a"),
            Event::Other(Some(Role::Other("system".to_string()))),
            assistant("b"),
        ]);

        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].events(), &[user("a"), assistant("b")]);
    }

    #[test]
    fn no_user_events_gives_no_turns() {
        let turns = group_into_turns(vec![assistant("a"), assistant("b")]);
        assert!(turns.is_empty());
    }
}
