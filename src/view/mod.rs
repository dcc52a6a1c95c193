//! Page rendering and navigation controller (impure shell)

pub mod export;
pub mod highlight;
pub mod page;
pub mod surface;

pub use export::{export_turns, turn_file_name, ExportError};
pub use highlight::SyntaxHighlighter;
pub use page::{HtmlPage, NavLinks};
pub use surface::{ElementId, Surface};

use crate::model::{group_into_turns, LoadError, Turn};
use crate::parser::{parse_transcript, LoadReport};
use crate::render::{cards, render_turn};
use crate::source::{load_transcript, TranscriptSource};
use crate::state::{Direction, ViewerState};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Counter text shown when a transcript produced no turns.
pub const NO_STEPS_TEXT: &str = "No steps found in file.";

/// Default distance between the viewport top and the content after a step.
pub const DEFAULT_SCROLL_OFFSET: u32 = 80;

/// Stepper behavior knobs.
#[derive(Debug, Clone)]
pub struct StepperOptions {
    /// Header offset used when scrolling to fresh content.
    pub scroll_offset: u32,
    /// HTTP fetch timeout; `None` waits indefinitely.
    pub fetch_timeout: Option<Duration>,
    /// Optional cosmetic highlighter run after each render.
    pub highlighter: Option<SyntaxHighlighter>,
}

impl Default for StepperOptions {
    fn default() -> Self {
        Self {
            scroll_offset: DEFAULT_SCROLL_OFFSET,
            fetch_timeout: None,
            highlighter: None,
        }
    }
}

/// Turn-by-turn viewer mounted on a page.
///
/// Owns the viewer state and the surface; every state change goes through
/// here so the page always reflects the cursor.
pub struct Stepper<S: Surface> {
    surface: S,
    state: ViewerState,
    options: StepperOptions,
}

impl<S: Surface> Stepper<S> {
    /// Mount onto `surface`.
    ///
    /// Returns `None` (and touches nothing) when the surface has no container.
    pub fn mount(surface: S, options: StepperOptions) -> Option<Self> {
        if !surface.has_container() {
            warn!("Transcript stepper element not found. Skipping init.");
            return None;
        }

        Some(Self {
            surface,
            state: ViewerState::unloaded(),
            options,
        })
    }

    /// Fetch, parse, group and display a transcript.
    ///
    /// On failure the page shows the error state before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns the `LoadError` from the source; not retried.
    pub fn load(&mut self, source: &TranscriptSource) -> Result<LoadReport, LoadError> {
        match load_transcript(source, self.options.fetch_timeout) {
            Ok(parsed) => {
                self.show_turns(group_into_turns(parsed.events));
                Ok(parsed.report)
            }
            Err(err) => {
                self.show_load_error(&err);
                Err(err)
            }
        }
    }

    /// Parse and display transcript text that is already in memory.
    pub fn load_text(&mut self, text: &str) -> LoadReport {
        let parsed = parse_transcript(text);
        self.show_turns(group_into_turns(parsed.events));
        parsed.report
    }

    /// Display grouped turns, replacing any previous state.
    pub fn show_turns(&mut self, turns: Vec<Turn>) {
        info!(turns = turns.len(), "Transcript grouped into turns");
        self.state = ViewerState::loaded(turns);

        if self.state.cursor().is_some() {
            self.render_current();
            self.update_nav_state();
            self.surface.hide_loading();
            self.surface.reveal();
        } else {
            self.surface.set_counter_text(NO_STEPS_TEXT);
            self.surface.set_control_enabled(Direction::Previous, false);
            self.surface.set_control_enabled(Direction::Next, false);
            self.surface.hide_loading();
        }
    }

    /// Replace the content with the load error state.
    pub fn show_load_error(&mut self, err: &LoadError) {
        self.state = ViewerState::unloaded();
        self.surface.set_content_html(cards::load_error_card(&err.to_string()));
        self.surface.set_control_enabled(Direction::Previous, false);
        self.surface.set_control_enabled(Direction::Next, false);
        self.surface.hide_loading();
        self.surface.reveal();
    }

    /// Step one turn. Returns `false` (page untouched) at either end.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        if !self.state.navigate(direction) {
            debug!(?direction, "Navigation ignored at boundary");
            return false;
        }
        self.after_step();
        true
    }

    /// Jump to turn `index`. Returns `false` (page untouched) when out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.state.select(index) {
            return false;
        }
        self.after_step();
        true
    }

    /// HTML of the displayed turn, highlighted when a highlighter is set.
    pub fn current_html(&self) -> Option<String> {
        let html = render_turn(self.state.current_turn()?);
        Some(match &self.options.highlighter {
            Some(highlighter) => highlighter.highlight_all_under(&html),
            None => html,
        })
    }

    /// Turns and cursor.
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// The page the stepper is mounted on.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the page, e.g. to set export links.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Unmount, handing back the page.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn after_step(&mut self) {
        self.render_current();
        self.update_nav_state();
        self.surface.scroll_content_into_view(self.options.scroll_offset);
    }

    fn render_current(&mut self) {
        if let Some(html) = self.current_html() {
            self.surface.set_content_html(html);
        }
    }

    fn update_nav_state(&mut self) {
        if let Some(counter) = self.state.counter_text() {
            self.surface.set_counter_text(&counter);
        }
        self.surface.set_control_enabled(Direction::Previous, self.state.can_go_previous());
        self.surface.set_control_enabled(Direction::Next, self.state.can_go_next());
    }
}
