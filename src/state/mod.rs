//! Viewer state machine (pure).
//!
//! All state transitions are pure functions testable without a page.

pub mod navigation;

// Re-export for convenience
pub use navigation::{Direction, ViewerState};
