//! Property-based tests for grouping, rendering and navigation invariants.
//!
//! Tests validate:
//! 1. Every turn starts with its only user event
//! 2. Concatenated turns equal the groupable events after the first user event
//! 3. Rendering is deterministic and never emits transcript markup
//! 4. Navigation stays in bounds and controls match the cursor

use proptest::prelude::*;
use serde_json::json;
use transcript_stepper::model::{
    group_into_turns, AssistantMessage, Event, Role, ThinkingBlock, ToolCall, ToolOutcome,
    UserMessage,
};
use transcript_stepper::parser::parse_transcript;
use transcript_stepper::render::render_turn;
use transcript_stepper::state::{Direction, ViewerState};

// ===== Strategies =====

fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z <>&\"'*`\n-]{0,40}",
        Just("<script>alert(1)</script>".to_string()),
        Just("**bold** and `code`\n- item".to_string()),
    ]
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        text().prop_map(|t| Event::User(UserMessage::new(t))),
        proptest::option::of(text()).prop_map(|t| Event::Assistant(AssistantMessage::new(t))),
        text().prop_map(|t| Event::Thinking(ThinkingBlock::new(t))),
        proptest::option::of(text()).prop_map(|name| {
            Event::ToolUse(Some(ToolCall::new(name, Some(json!({ "command": "ls" })))))
        }),
        (text(), any::<bool>())
            .prop_map(|(t, err)| Event::ToolResult(Some(ToolOutcome::new(t, err)))),
        Just(Event::ToolUse(None)),
        Just(Event::Other(Some(Role::Other("system".to_string())))),
        Just(Event::Other(None)),
    ]
}

fn directions() -> impl Strategy<Value = Vec<Direction>> {
    proptest::collection::vec(
        prop_oneof![Just(Direction::Previous), Just(Direction::Next)],
        0..40,
    )
}

/// Expected concatenation: drop everything before the first user event, then
/// keep only user and turn-joining events.
fn groupable(events: &[Event]) -> Vec<Event> {
    events
        .iter()
        .skip_while(|e| !e.is_user())
        .filter(|e| e.is_user() || e.joins_turn())
        .cloned()
        .collect()
}

// ===== Property 1 & 2: Grouping =====

proptest! {
    #[test]
    fn every_turn_leads_with_its_only_user_event(events in proptest::collection::vec(event(), 0..60)) {
        for turn in group_into_turns(events) {
            prop_assert!(!turn.is_empty());
            prop_assert!(turn.leading().is_user());
            prop_assert!(turn.events()[1..].iter().all(|e| !e.is_user()));
        }
    }

    #[test]
    fn turns_partition_the_groupable_events(events in proptest::collection::vec(event(), 0..60)) {
        let expected = groupable(&events);
        let user_count = events.iter().filter(|e| e.is_user()).count();

        let turns = group_into_turns(events);
        let flattened: Vec<Event> = turns.iter().flat_map(|t| t.events().iter().cloned()).collect();

        prop_assert_eq!(turns.len(), user_count);
        prop_assert_eq!(flattened, expected);
    }

    #[test]
    fn parsing_never_panics_and_counts_every_line(lines in proptest::collection::vec("[ -~]{0,60}", 1..20)) {
        let text = lines.join("\n");
        let report = parse_transcript(&text).report;
        prop_assert_eq!(report.lines, report.kept + report.malformed + report.irrelevant);
    }
}

// ===== Property 3: Rendering =====

proptest! {
    #[test]
    fn rendering_is_deterministic(events in proptest::collection::vec(event(), 1..20)) {
        for turn in group_into_turns(events) {
            prop_assert_eq!(render_turn(&turn), render_turn(&turn));
        }
    }

    #[test]
    fn transcript_markup_never_renders_as_tags(payload in text()) {
        let events = vec![
            Event::User(UserMessage::new(payload.clone())),
            Event::Assistant(AssistantMessage::new(Some(payload.clone()))),
            Event::Thinking(ThinkingBlock::new(payload.clone())),
            Event::ToolResult(Some(ToolOutcome::new(payload.clone(), true))),
        ];
        let html = render_turn(&group_into_turns(events)[0]);
        prop_assert!(!html.contains("<script"));
    }
}

// ===== Property 4: Navigation =====

proptest! {
    #[test]
    fn cursor_stays_in_bounds(user_count in 0usize..8, moves in directions()) {
        let events: Vec<Event> = (0..user_count)
            .map(|i| Event::User(UserMessage::new(format!("u{i}"))))
            .collect();
        let mut state = ViewerState::loaded(group_into_turns(events));

        for direction in moves {
            let before = state.cursor();
            let moved = state.navigate(direction);

            match state.cursor() {
                Some(cursor) => prop_assert!(cursor < user_count),
                None => prop_assert_eq!(user_count, 0),
            }
            prop_assert_eq!(moved, before != state.cursor());
            if let Some(cursor) = state.cursor() {
                prop_assert_eq!(state.can_go_previous(), cursor > 0);
                prop_assert_eq!(state.can_go_next(), cursor + 1 < user_count);
            }
        }
    }
}
