//! Engine - the fixed-rate frame loop and runtime configuration
//!
//! The loop is single-threaded: each frame polls at most one input event,
//! advances the game by one step, hands a snapshot to the sink, then sleeps out
//! the rest of the frame. Terminal input and output plug in through
//! [`InputSource`] and [`FrameSink`], so the same loop runs headless in tests.

pub use falltris_core as core;
pub use falltris_types as types;

pub mod clock;
pub mod config;
pub mod run;

pub use clock::FrameClock;
pub use config::Config;
pub use run::{run, ExitReason, FrameSink, InputSource, RunOptions, RunSummary, ScriptedInput};
