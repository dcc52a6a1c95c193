//! Transcript stepper
//!
//! Turns a newline-delimited JSON chat transcript into a turn-by-turn
//! reading view: one page per conversational turn, with previous/next
//! controls and a "Turn i of N" counter.
//!
//! Pure Core / Impure Shell:
//! - `parser`, `model`, `render`, `state` are pure
//! - `source`, `view`, `config`, `logging` touch the outside world

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod render;
pub mod source;
pub mod state;
pub mod view;
