//! The page a stepper is mounted on.
//!
//! [`Surface`] is the contract between the stepper and its host page: a
//! container, a content area, a loading indicator, previous/next controls and
//! a counter, each identified by a well-known element id.

use crate::state::Direction;

/// Well-known elements of the stepper markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// Root of the stepper markup
    Container,
    /// Area holding the rendered turn
    Content,
    /// Indicator shown until the first render
    Loading,
    /// Next-turn control
    NextButton,
    /// Previous-turn control
    PrevButton,
    /// "Turn i of N" label
    Counter,
}

impl ElementId {
    /// DOM id of the element.
    pub const fn id(self) -> &'static str {
        match self {
            ElementId::Container => "transcript-stepper",
            ElementId::Content => "transcript-content",
            ElementId::Loading => "transcript-loading",
            ElementId::NextButton => "next-step",
            ElementId::PrevButton => "prev-step",
            ElementId::Counter => "step-counter",
        }
    }

    /// Control element stepping in `direction`.
    pub const fn control(direction: Direction) -> Self {
        match direction {
            Direction::Previous => ElementId::PrevButton,
            Direction::Next => ElementId::NextButton,
        }
    }
}

/// Host page operations used by the stepper.
///
/// Implementations own the page; the stepper only ever calls these after
/// [`has_container`](Surface::has_container) returned true.
pub trait Surface {
    /// Whether the container element exists. A page without it is not a
    /// stepper page and the stepper does nothing.
    fn has_container(&self) -> bool;

    /// Replace the content element's inner HTML.
    fn set_content_html(&mut self, html: String);

    /// Replace the counter element's text.
    fn set_counter_text(&mut self, text: &str);

    /// Hide the loading indicator.
    fn hide_loading(&mut self);

    /// Make the container visible (it starts transparent while loading).
    fn reveal(&mut self);

    /// Enable or disable the control stepping in `direction`.
    fn set_control_enabled(&mut self, direction: Direction, enabled: bool);

    /// Smooth-scroll so the top of the content sits `header_offset` pixels
    /// below the top of the viewport. Cosmetic only.
    fn scroll_content_into_view(&mut self, header_offset: u32);
}
