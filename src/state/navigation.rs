//! Turn navigation state machine.
//!
//! Pure state: the grouped turns plus a cursor. The cursor is `None` until a
//! transcript with at least one turn has been loaded, and otherwise always
//! stays within `0..turn_count`.

use crate::model::Turn;

/// Direction of a step request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the first turn
    Previous,
    /// Toward the last turn
    Next,
}

/// Turns of a loaded transcript and the index of the displayed one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerState {
    turns: Vec<Turn>,
    cursor: Option<usize>,
}

impl ViewerState {
    /// State before any transcript is loaded.
    pub fn unloaded() -> Self {
        Self::default()
    }

    /// State right after a load: first turn selected, or no cursor when the
    /// transcript had no turns.
    pub fn loaded(turns: Vec<Turn>) -> Self {
        let cursor = if turns.is_empty() { None } else { Some(0) };
        Self { turns, cursor }
    }

    /// All turns in transcript order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of loaded turns.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Index of the displayed turn.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The displayed turn.
    pub fn current_turn(&self) -> Option<&Turn> {
        self.cursor.and_then(|index| self.turns.get(index))
    }

    /// Move one turn in `direction`.
    ///
    /// Returns `false` (and leaves the cursor alone) at either end, or when
    /// nothing is loaded.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let Some(current) = self.cursor else {
            return false;
        };

        let target = match direction {
            Direction::Previous => current.checked_sub(1),
            Direction::Next => Some(current + 1).filter(|&next| next < self.turns.len()),
        };

        match target {
            Some(index) => {
                self.cursor = Some(index);
                true
            }
            None => false,
        }
    }

    /// Jump straight to turn `index`.
    ///
    /// Returns `false` when `index` is out of range or nothing is loaded.
    pub fn select(&mut self, index: usize) -> bool {
        if self.cursor.is_none() || index >= self.turns.len() {
            return false;
        }
        self.cursor = Some(index);
        true
    }

    /// Whether a `Previous` step would move.
    pub fn can_go_previous(&self) -> bool {
        self.cursor.is_some_and(|index| index > 0)
    }

    /// Whether a `Next` step would move.
    pub fn can_go_next(&self) -> bool {
        self.cursor.is_some_and(|index| index + 1 < self.turns.len())
    }

    /// Counter label for the displayed turn, e.g. `Turn 2 of 5`.
    pub fn counter_text(&self) -> Option<String> {
        self.cursor.map(|index| format!("Turn {} of {}", index + 1, self.turns.len()))
    }
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod tests;
