//! Terminal input (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::InputEvent`] and exposes a
//! non-blocking [`TerminalInput`] source for the frame loop. There is no
//! auto-repeat handling: one key press is one event.

pub mod map;
pub mod poll;

pub use falltris_engine as engine;
pub use falltris_types as types;

pub use map::{map_event, map_key, should_quit};
pub use poll::TerminalInput;
