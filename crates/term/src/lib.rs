//! Terminal rendering for the game.
//!
//! Snapshots are drawn into a [`FrameBuffer`] by the pure [`GameView`], then
//! [`Screen`] sends only the glyphs that changed since the previous frame.
//! Board cells are two terminal columns wide to keep them roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sink;

pub use falltris_core as core;
pub use falltris_engine as engine;
pub use falltris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{piece_color, GameView, Layout, Viewport};
pub use renderer::{write_changes, write_full, Screen};
pub use sink::TerminalSink;
